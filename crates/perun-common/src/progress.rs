//! Progress counting shared across worker threads.

use std::sync::atomic::{AtomicUsize, Ordering};

/// A monotonic counter for reporting progress from many worker threads.
///
/// A plain integer increment is not safe under concurrent writers, so the
/// count lives in an [`AtomicUsize`] and the only way to advance it is
/// [`increment`](Self::increment).
#[derive(Debug, Default)]
pub struct ProgressCounter {
    current: AtomicUsize,
}

impl ProgressCounter {
    /// Create a counter starting at zero.
    pub const fn new() -> Self {
        Self {
            current: AtomicUsize::new(0),
        }
    }

    /// Add one to the count, returning the new value.
    #[inline]
    pub fn increment(&self) -> usize {
        self.current.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Get the current count.
    #[inline]
    pub fn current(&self) -> usize {
        self.current.load(Ordering::Relaxed)
    }

    /// Reset the count to zero for a new batch of work.
    pub fn reset(&self) {
        self.current.store(0, Ordering::Relaxed);
    }
}
