//! `Tracked` — a value type that counts its own live instances.
//!
//! Every construction path (`new`, `Default`, `Clone`) increments a counter and
//! every drop decrements it, so ownership bugs in `UniquePtr` show up as a
//! counter that is too high (leak) or too low (double destruction).
//!
//! The counter is thread-local. It is unsynchronized, matching the
//! single-threaded contract of `UniquePtr`, and each test thread observes
//! only the instances it created.

use core::cell::Cell;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
}

fn adjust(delta: isize) {
    LIVE.with(|live| live.set(live.get() + delta));
}

/// An integer payload whose constructions and destructions are counted.
#[derive(Debug, PartialEq, Eq)]
pub struct Tracked {
    /// The payload.
    pub value: i32,
}

impl Tracked {
    /// Creates a tracked value, incrementing the live counter.
    pub fn new(value: i32) -> Self {
        adjust(1);
        Self { value }
    }

    /// Number of `Tracked` instances currently alive on this thread.
    pub fn live() -> isize {
        LIVE.with(Cell::get)
    }

    /// Sets the live counter of this thread back to zero.
    pub fn reset_live() {
        LIVE.with(|live| live.set(0));
    }
}

impl Default for Tracked {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Self::new(self.value)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        adjust(-1);
    }
}
