//! # `solo` - Exclusive-Ownership Smart Pointer
//!
//! A minimal owning pointer: a [`UniquePtr<T>`] owns at most one heap-allocated
//! `T`, destroys it deterministically, and can only hand its ownership on by
//! moving it, never by duplicating it.
//!
//! ## Safety Guarantees
//!
//! - **No duplication**: `UniquePtr` implements neither `Clone` nor `Copy`;
//!   copying ownership is a compile-time error.
//! - **Exactly-once destruction**: an owning pointer destroys its object once,
//!   synchronously, on drop, clear, reset, or assignment. Moved-from and
//!   released pointers are empty and dropping them does nothing.
//! - **Checked dereference**: [`UniquePtr::try_ref`] and [`UniquePtr::try_mut`]
//!   return [`NullAccessError`] on an empty pointer.
//! - **Single-threaded**: `UniquePtr` is neither `Send` nor `Sync`.
//!
//! ## Architecture
//!
//! 1. **Heap** ([`alloc::heap`]): single-object blocks with the same layout
//!    as `Box<T>`, so addresses can move between the two.
//! 2. **Owner** ([`UniquePtr`]): the two-state (empty / owning) container and
//!    every ownership transition.
//! 3. **Probe** ([`probe::Tracked`]): a value that counts its live instances,
//!    used to observe lifetime guarantees in tests.
//!
//! ## Example
//!
//! ```rust
//! use solo::probe::Tracked;
//! use solo::UniquePtr;
//!
//! Tracked::reset_live();
//! {
//!     let mut ptr = UniquePtr::new(Tracked::new(1));
//!     assert_eq!(Tracked::live(), 1);
//!
//!     // The old object is destroyed and the new one adopted.
//!     ptr.reset(UniquePtr::new(Tracked::new(2)));
//!     assert_eq!(Tracked::live(), 1);
//!     assert_eq!(ptr.value, 2);
//! }
//! assert_eq!(Tracked::live(), 0);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod trace;

pub mod alloc;
pub mod error;
pub mod probe;
pub mod unique;

pub use error::{AllocError, NullAccessError};
pub use unique::UniquePtr;

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // The empty state uses the null niche, so an owner is exactly one pointer wide.
    assert!(mem::size_of::<UniquePtr<u64>>() == mem::size_of::<*mut u64>());
    assert!(mem::align_of::<UniquePtr<u64>>() == mem::align_of::<*mut u64>());
    assert!(mem::size_of::<UniquePtr<()>>() == mem::size_of::<usize>());

    // Errors carry no data.
    assert!(mem::size_of::<NullAccessError>() == 0);
    assert!(mem::size_of::<AllocError>() == 0);
};
