use solo::alloc::heap;
use solo::probe::Tracked;
use solo::{NullAccessError, UniquePtr};
use std::ptr::NonNull;

#[test]
fn test_lifetime_reset_then_scope_exit() {
    Tracked::reset_live();
    {
        let mut ptr = UniquePtr::new(Tracked::default());
        assert_eq!(Tracked::live(), 1);

        ptr.reset(UniquePtr::new(Tracked::default()));
        assert_eq!(Tracked::live(), 1);
    }
    assert_eq!(Tracked::live(), 0);
}

#[test]
fn test_lifetime_release_then_manual_delete() {
    Tracked::reset_live();
    {
        let mut ptr = UniquePtr::new(Tracked::default());
        assert_eq!(Tracked::live(), 1);

        let raw = ptr.release();
        assert_eq!(Tracked::live(), 1);

        // Manual delete of the released object.
        unsafe { heap::destroy(NonNull::new(raw).unwrap()) };
        assert_eq!(Tracked::live(), 0);
    }
    assert_eq!(Tracked::live(), 0);
}

#[test]
fn test_lifetime_release_into_box() {
    Tracked::reset_live();
    let mut ptr = UniquePtr::new(Tracked::new(1));
    let raw = ptr.release();
    drop(ptr);
    assert_eq!(Tracked::live(), 1);

    // Released addresses share Box's layout.
    let boxed = unsafe { Box::from_raw(raw) };
    drop(boxed);
    assert_eq!(Tracked::live(), 0);
}

#[test]
fn test_getters() {
    let ptr = UniquePtr::new(Tracked::new(42));
    assert_eq!(unsafe { (*ptr.get()).value }, 42);
    assert_eq!((*ptr).value, 42);
    assert_eq!(ptr.value, 42);
    assert_eq!(unsafe { ptr.as_ref_unchecked() }.value, 42);
    assert_eq!(ptr.try_ref().map(|t| t.value), Ok(42));
}

#[test]
fn test_null_access_is_reported() {
    let ptr: UniquePtr<Tracked> = UniquePtr::null();
    let err = ptr.try_ref().unwrap_err();
    assert_eq!(err, NullAccessError);
    assert_eq!(err.to_string(), "cannot dereference a null UniquePtr");
}

#[test]
fn test_null_access_propagates_with_question_mark() {
    fn payload(ptr: &UniquePtr<Tracked>) -> Result<i32, Box<dyn std::error::Error>> {
        Ok(ptr.try_ref()?.value)
    }

    assert_eq!(payload(&UniquePtr::new(Tracked::new(3))).unwrap(), 3);
    assert!(payload(&UniquePtr::null()).is_err());
}

#[test]
fn test_native_move_transfers_ownership() {
    Tracked::reset_live();
    let a = UniquePtr::new(Tracked::new(1));
    let addr = a.get();

    let b = a;
    assert_eq!(b.get(), addr);
    assert_eq!(Tracked::live(), 1);

    let mut v = vec![b];
    assert_eq!(Tracked::live(), 1);
    v.clear();
    assert_eq!(Tracked::live(), 0);
}

#[test]
fn test_move_assign_by_value() {
    Tracked::reset_live();
    let mut a = UniquePtr::new(Tracked::new(1));
    let b = UniquePtr::new(Tracked::new(2));
    assert_eq!(Tracked::live(), 2);

    // Plain assignment drops the old owner first.
    a = b;
    assert_eq!(Tracked::live(), 1);
    assert_eq!(a.value, 2);
}

#[test]
fn test_swap_between_owners() {
    Tracked::reset_live();
    let mut a = UniquePtr::new(Tracked::new(10));
    let mut b = UniquePtr::new(Tracked::new(20));

    a.swap(&mut b);
    assert_eq!(a.value, 20);
    assert_eq!(b.value, 10);
    assert_eq!(Tracked::live(), 2);

    drop(a);
    assert_eq!(Tracked::live(), 1);
    drop(b);
    assert_eq!(Tracked::live(), 0);
}

#[test]
fn test_cleanup_on_early_return() {
    fn early(flag: bool) -> Option<i32> {
        let ptr = UniquePtr::new(Tracked::new(5));
        if flag {
            return None;
        }
        Some(ptr.value)
    }

    Tracked::reset_live();
    assert_eq!(early(true), None);
    assert_eq!(Tracked::live(), 0);
    assert_eq!(early(false), Some(5));
    assert_eq!(Tracked::live(), 0);
}

#[test]
fn test_cleanup_on_panic() {
    Tracked::reset_live();
    let result = std::panic::catch_unwind(|| {
        let _ptr = UniquePtr::new(Tracked::new(1));
        assert_eq!(Tracked::live(), 1);
        panic!("unwinding through an owner");
    });
    assert!(result.is_err());
    assert_eq!(Tracked::live(), 0);
}

#[test]
fn test_nested_owners() {
    Tracked::reset_live();
    let mut outer = UniquePtr::new(UniquePtr::new(Tracked::new(8)));
    assert_eq!(outer.value, 8);
    assert_eq!(Tracked::live(), 1);

    let inner = outer.take().into_inner().unwrap();
    assert!(outer.is_null());
    assert_eq!(inner.value, 8);
    assert_eq!(Tracked::live(), 1);

    drop(inner);
    assert_eq!(Tracked::live(), 0);
}

#[test]
fn test_try_new_allocates() {
    let ptr = UniquePtr::try_new(Tracked::new(6)).unwrap();
    assert_eq!(ptr.value, 6);
}
