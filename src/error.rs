//! Error types surfaced by `UniquePtr` and the heap helpers.

use core::fmt;

/// Returned when an empty `UniquePtr` is dereferenced through a checked accessor.
///
/// This is a contract violation by the caller, never a transient condition;
/// nothing in the crate retries or recovers from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NullAccessError;

impl fmt::Display for NullAccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("cannot dereference a null UniquePtr")
    }
}

impl std::error::Error for NullAccessError {}

/// The error type for allocation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocError;

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("memory allocation failed")
    }
}

impl std::error::Error for AllocError {}
