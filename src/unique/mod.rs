//! `UniquePtr` — exclusive ownership of a single heap object.
//!
//! A `UniquePtr<T>` is either **empty** or **owning** exactly one heap-allocated
//! `T`. Ownership only ever moves between owners; it is never duplicated, and
//! an owning `UniquePtr` destroys its object exactly once when it is dropped,
//! cleared, reset, or assigned over.
//!
//! ## State machine
//!
//! ```text
//!            new / from_raw / reset / assign / take (into the target)
//!   Empty  ------------------------------------------------------->  Owning(p)
//!     ^                                                                 |
//!     |   release / clear / reset(null) / take (from the source) / drop |
//!     +-----------------------------------------------------------------+
//!
//!   Owning(p) --reset(q) / assign(q)--> Owning(q)   (p is destroyed first)
//! ```
//!
//! ## Checked and unchecked access
//!
//! [`UniquePtr::try_ref`] and [`UniquePtr::try_mut`] report
//! [`NullAccessError`] on an empty owner, and the `Deref` impls panic with the
//! same message. [`UniquePtr::as_ref_unchecked`] mirrors raw member access: it
//! performs no emptiness check and is therefore `unsafe`.

mod serde_impls;


use crate::alloc::heap;
use crate::error::{AllocError, NullAccessError};
use crate::trace::trace_event;
use core::fmt;
use core::marker::PhantomData;
use core::mem::ManuallyDrop;
use core::ops::{Deref, DerefMut};
use core::ptr::{self, NonNull};

/// An owning pointer to a single heap-allocated `T`, or nothing.
///
/// `UniquePtr` is move-only. It implements neither `Clone` nor `Copy`, so
/// ownership cannot be silently doubled:
///
/// ```compile_fail
/// use solo::UniquePtr;
///
/// let a = UniquePtr::new(1);
/// let b: UniquePtr<i32> = UniquePtr::clone(&a);
/// ```
///
/// Method-call `ptr.clone()` still compiles when `T: Clone`: it auto-derefs
/// and clones the pointee, returning a `T` (and panics on an empty pointer).
///
/// A moved-from binding is statically unusable:
///
/// ```compile_fail
/// use solo::UniquePtr;
///
/// let a = UniquePtr::new(1);
/// let b = a;
/// let _ = a.get();
/// ```
///
/// The pointer is not `Send` or `Sync`; it is meant for single-threaded use.
///
/// ```compile_fail
/// use solo::UniquePtr;
///
/// fn assert_send<T: Send>(_: T) {}
/// assert_send(UniquePtr::new(1));
/// ```
pub struct UniquePtr<T> {
    ptr: Option<NonNull<T>>,
    _owns: PhantomData<T>,
}

impl<T> UniquePtr<T> {
    /// Creates an empty pointer.
    #[inline]
    pub const fn null() -> Self {
        Self {
            ptr: None,
            _owns: PhantomData,
        }
    }

    /// Moves `value` to the heap and owns it.
    pub fn new(value: T) -> Self {
        let ptr = heap::allocate(value);
        trace_event!("adopt", T, ptr);
        Self {
            ptr: Some(ptr),
            _owns: PhantomData,
        }
    }

    /// Like [`UniquePtr::new`], but reports allocator exhaustion instead of aborting.
    ///
    /// # Errors
    /// Returns `AllocError` if the global allocator returns null. `value` is
    /// dropped in that case.
    pub fn try_new(value: T) -> Result<Self, AllocError> {
        match heap::try_allocate(value) {
            Ok(ptr) => {
                trace_event!("adopt", T, ptr);
                Ok(Self {
                    ptr: Some(ptr),
                    _owns: PhantomData,
                })
            }
            Err((err, _value)) => Err(err),
        }
    }

    /// Takes ownership of `ptr`. A null `ptr` yields an empty pointer.
    ///
    /// # Safety
    /// A non-null `ptr` must come from [`heap::allocate`], `Box::into_raw`,
    /// [`UniquePtr::release`] or [`UniquePtr::into_raw`], must point to a live
    /// value, and must not be owned by anything else.
    pub unsafe fn from_raw(ptr: *mut T) -> Self {
        let ptr = NonNull::new(ptr);
        trace_event!("adopt", T, ptr);
        Self {
            ptr,
            _owns: PhantomData,
        }
    }

    /// Moves the owned address into a new pointer, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        let ptr = self.ptr.take();
        trace_event!("move", T, ptr);
        Self {
            ptr,
            _owns: PhantomData,
        }
    }

    /// Destroys the owned object, if any, and leaves `self` empty.
    ///
    /// Calling it on an empty pointer does nothing.
    pub fn clear(&mut self) {
        // Detach first: the owner is already empty while the object's
        // destructor runs, so a panicking destructor cannot cause a second free.
        if let Some(old) = self.ptr.take() {
            trace_event!("destroy", T, old);
            // SAFETY: `old` was exclusively owned by `self` and is now detached.
            unsafe { heap::destroy(old) };
        }
    }

    /// Destroys the object owned by `self`, then adopts the address owned by
    /// `source`, leaving `source` empty.
    ///
    /// `self` and `source` are two distinct `&mut` borrows, so assigning a
    /// pointer to itself cannot be written.
    pub fn assign(&mut self, source: &mut Self) {
        self.clear();
        self.ptr = source.ptr.take();
        trace_event!("adopt", T, self.ptr);
    }

    /// Borrows the owned object.
    ///
    /// # Errors
    /// Returns [`NullAccessError`] if the pointer is empty.
    #[inline]
    pub fn try_ref(&self) -> Result<&T, NullAccessError> {
        match self.ptr {
            // SAFETY: the pointee is live and owned by `self`; the borrow is tied to `&self`.
            Some(ptr) => Ok(unsafe { ptr.as_ref() }),
            None => Err(NullAccessError),
        }
    }

    /// Mutably borrows the owned object.
    ///
    /// # Errors
    /// Returns [`NullAccessError`] if the pointer is empty.
    #[inline]
    pub fn try_mut(&mut self) -> Result<&mut T, NullAccessError> {
        match self.ptr {
            // SAFETY: unique ownership plus `&mut self` gives exclusive access.
            Some(mut ptr) => Ok(unsafe { ptr.as_mut() }),
            None => Err(NullAccessError),
        }
    }

    /// Borrows the owned object without checking for emptiness.
    ///
    /// # Safety
    /// The pointer must not be empty.
    #[inline]
    pub unsafe fn as_ref_unchecked(&self) -> &T {
        &*self.get()
    }

    /// Mutably borrows the owned object without checking for emptiness.
    ///
    /// # Safety
    /// The pointer must not be empty.
    #[inline]
    pub unsafe fn as_mut_unchecked(&mut self) -> &mut T {
        &mut *self.get()
    }

    /// Hands the owned address to the caller and leaves `self` empty.
    ///
    /// Nothing is destroyed. The caller becomes responsible for the object,
    /// for example by passing the address back to [`UniquePtr::from_raw`] or
    /// to [`heap::destroy`]. Returns null if `self` was empty.
    #[must_use = "losing the released pointer leaks the object"]
    pub fn release(&mut self) -> *mut T {
        let ptr = self.ptr.take();
        trace_event!("release", T, ptr);
        ptr.map_or(ptr::null_mut(), NonNull::as_ptr)
    }

    /// Consumes the pointer and returns the owned address without destroying it.
    #[must_use = "losing the released pointer leaks the object"]
    pub fn into_raw(self) -> *mut T {
        let mut this = ManuallyDrop::new(self);
        this.release()
    }

    /// Destroys the owned object, if any, then adopts whatever `next` owns.
    ///
    /// The old object is fully destroyed before the new address is stored.
    /// Passing [`UniquePtr::null`] is equivalent to [`UniquePtr::clear`].
    pub fn reset(&mut self, mut next: Self) {
        self.clear();
        self.ptr = next.ptr.take();
        trace_event!("reset", T, self.ptr);
    }

    /// Destroys the owned object, if any, then adopts `ptr`.
    ///
    /// # Safety
    /// Same contract as [`UniquePtr::from_raw`].
    pub unsafe fn reset_raw(&mut self, ptr: *mut T) {
        self.clear();
        self.ptr = NonNull::new(ptr);
        trace_event!("reset", T, self.ptr);
    }

    /// Exchanges the owned addresses of `self` and `other`.
    ///
    /// Performed as three moves through a temporary owner; no object is
    /// constructed or destroyed, and at no step is an address held twice.
    pub fn swap(&mut self, other: &mut Self) {
        let mut temp = other.take();
        other.assign(self);
        self.assign(&mut temp);
    }

    /// Returns the owned address, or null if empty. Ownership is unaffected.
    #[inline]
    pub fn get(&self) -> *mut T {
        self.ptr.map_or(ptr::null_mut(), NonNull::as_ptr)
    }

    /// Returns `true` if the pointer owns nothing.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.ptr.is_none()
    }

    /// Moves the owned object back onto the stack and frees its heap block.
    pub fn into_inner(mut self) -> Option<T> {
        let ptr = self.ptr.take()?;
        trace_event!("reclaim", T, ptr);
        // SAFETY: `ptr` was exclusively owned by `self` and is now detached.
        Some(unsafe { heap::reclaim(ptr) })
    }

    /// Converts the owned object into a `Box` without reallocating.
    pub fn into_box(self) -> Option<Box<T>> {
        let raw = self.into_raw();
        if raw.is_null() {
            None
        } else {
            // SAFETY: heap blocks use `Layout::new::<T>()` from the global allocator.
            Some(unsafe { Box::from_raw(raw) })
        }
    }
}

impl<T> Drop for UniquePtr<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for UniquePtr<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> Deref for UniquePtr<T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self.try_ref() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> DerefMut for UniquePtr<T> {
    fn deref_mut(&mut self) -> &mut T {
        match self.try_mut() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> From<Box<T>> for UniquePtr<T> {
    fn from(boxed: Box<T>) -> Self {
        // SAFETY: `Box<T>` allocates with the layout `heap` frees with, and
        // `into_raw` gives up the box's ownership.
        unsafe { Self::from_raw(Box::into_raw(boxed)) }
    }
}

impl<T: fmt::Debug> fmt::Debug for UniquePtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_ref() {
            Ok(value) => f.debug_tuple("UniquePtr").field(value).finish(),
            Err(_) => f.write_str("UniquePtr(null)"),
        }
    }
}

impl<T> fmt::Pointer for UniquePtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&self.get(), f)
    }
}
