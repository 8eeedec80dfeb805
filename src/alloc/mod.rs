//! Heap allocation for single owned objects.

pub mod heap;

pub use crate::error::AllocError;
pub use heap::{allocate, destroy, reclaim, try_allocate};
