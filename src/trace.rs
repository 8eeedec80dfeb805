//! Lifecycle tracing.
//!
//! With the `tracing` feature enabled, ownership transitions are emitted as
//! `TRACE` events under the `solo::unique` target, carrying the operation
//! name, the address involved, and the pointee type. Without it the macro
//! expands to nothing and its arguments are not evaluated.

/// Emits a `tracing::trace!` event for an ownership transition.
///
/// `trace_event!(op, Type, ptr)`: `op` is a string literal, `Type` the pointee
/// type, and `ptr` anything implementing `Debug`.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($op:literal, $ty:ty, $ptr:expr) => {
        ::tracing::trace!(
            target: "solo::unique",
            op = $op,
            ptr = ?$ptr,
            ty = ::core::any::type_name::<$ty>()
        )
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($op:literal, $ty:ty, $ptr:expr) => {};
}

pub(crate) use trace_event;
