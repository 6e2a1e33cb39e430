//! Increase-only counter backed by an atomic 64-bit integer.

use std::sync::atomic::{AtomicI64, Ordering};

/// A named, monotonically increasing counter.
///
/// Updates are plain atomic adds and never touch the registry lock, so any
/// number of threads may increment the same handle concurrently without lost
/// updates. Handles are shared as `Arc<Counter>` by [`CounterBox`].
///
/// `increment_by` accepts a negative delta; nothing clamps the value. That is
/// an escape hatch for callers that know what they are doing, not part of the
/// counter's semantic contract.
///
/// [`CounterBox`]: crate::CounterBox
#[derive(Debug)]
pub struct Counter {
    name: String,
    value: AtomicI64,
}

impl Counter {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            value: AtomicI64::new(0),
        }
    }

    /// Increase the counter by one.
    #[inline]
    pub fn increment(&self) {
        self.value.fetch_add(1, Ordering::SeqCst);
    }

    /// Increase the counter by `n`.
    #[inline]
    pub fn increment_by(&self, n: i64) {
        self.value.fetch_add(n, Ordering::SeqCst);
    }

    /// Name this counter was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value. Every increment that completed before this call is
    /// visible in the returned value.
    #[inline]
    pub fn value(&self) -> i64 {
        self.value.load(Ordering::SeqCst)
    }
}
