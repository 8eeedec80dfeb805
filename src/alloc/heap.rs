//! Single-object heap blocks backing `UniquePtr`.
//!
//! Every block is obtained from the global allocator with `Layout::new::<T>()`,
//! which is the same layout `Box<T>` uses. Addresses produced here and
//! addresses produced by `Box::into_raw` are therefore interchangeable.
//! Zero-sized types never touch the allocator; they live at a dangling,
//! well-aligned address.

use crate::error::AllocError;
use core::alloc::Layout;
use core::ptr::{self, NonNull};
use std::alloc::{alloc, dealloc, handle_alloc_error};

/// Moves `value` into a fresh heap block.
///
/// Aborts through `handle_alloc_error` if the allocator is exhausted.
pub fn allocate<T>(value: T) -> NonNull<T> {
    match try_allocate(value) {
        Ok(ptr) => ptr,
        Err((AllocError, _)) => handle_alloc_error(Layout::new::<T>()),
    }
}

/// Moves `value` into a fresh heap block, handing the value back on failure.
///
/// # Errors
/// Returns `AllocError` together with the unplaced value if the global
/// allocator returns null.
pub fn try_allocate<T>(value: T) -> Result<NonNull<T>, (AllocError, T)> {
    let layout = Layout::new::<T>();
    let raw = if layout.size() == 0 {
        NonNull::<T>::dangling().as_ptr()
    } else {
        // SAFETY: T is Sized and the layout has non-zero size.
        unsafe { alloc(layout).cast::<T>() }
    };

    let Some(ptr) = NonNull::new(raw) else {
        return Err((AllocError, value));
    };

    // SAFETY: ptr is non-null, aligned for T and valid for writes.
    unsafe { ptr::write(ptr.as_ptr(), value) };
    Ok(ptr)
}

/// Drops the value at `ptr` in place and returns its block to the allocator.
///
/// # Safety
/// `ptr` must come from [`allocate`], [`try_allocate`] or `Box::into_raw`,
/// must still hold a live value, and must not be used again afterwards.
pub unsafe fn destroy<T>(ptr: NonNull<T>) {
    ptr::drop_in_place(ptr.as_ptr());
    free(ptr);
}

/// Moves the value out of `ptr` and returns its block to the allocator.
///
/// # Safety
/// Same contract as [`destroy`].
pub unsafe fn reclaim<T>(ptr: NonNull<T>) -> T {
    let value = ptr::read(ptr.as_ptr());
    free(ptr);
    value
}

unsafe fn free<T>(ptr: NonNull<T>) {
    let layout = Layout::new::<T>();
    if layout.size() != 0 {
        dealloc(ptr.as_ptr().cast::<u8>(), layout);
    }
}
