//! Extremum trackers: lock-free maximum and minimum of observed values.
//!
//! `set` is a read-compare-swap retry loop, not a mutex. After a failed swap
//! the loop re-reads and re-compares, because the racing writer may already
//! have stored a value at least as extreme, in which case the call must
//! return without writing rather than clobber the newer extremum.
//!
//! Both trackers start at 0, not at the integer extremum. A min tracker that
//! only ever sees positive values therefore reports 0 forever; callers are
//! expected to know this.

use std::sync::atomic::{AtomicI64, Ordering};

/// Tracks the largest value passed to [`MaxTracker::set`] since creation
/// (floored at the initial 0).
#[derive(Debug)]
pub struct MaxTracker {
    name: String,
    value: AtomicI64,
}

impl MaxTracker {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            value: AtomicI64::new(0),
        }
    }

    /// Record `v` if it is strictly greater than the current value.
    pub fn set(&self, v: i64) {
        let mut current = self.value.load(Ordering::SeqCst);
        while v > current {
            match self
                .value
                .compare_exchange(current, v, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => return,
                Err(observed) => current = observed,
            }
        }
    }

    /// Name this tracker was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current maximum.
    #[inline]
    pub fn value(&self) -> i64 {
        self.value.load(Ordering::SeqCst)
    }
}

/// Tracks the smallest value passed to [`MinTracker::set`] since creation
/// (ceilinged at the initial 0).
#[derive(Debug)]
pub struct MinTracker {
    name: String,
    value: AtomicI64,
}

impl MinTracker {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            value: AtomicI64::new(0),
        }
    }

    /// Record `v` if it is strictly less than the current value.
    pub fn set(&self, v: i64) {
        let mut current = self.value.load(Ordering::SeqCst);
        while v < current {
            match self
                .value
                .compare_exchange(current, v, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => return,
                Err(observed) => current = observed,
            }
        }
    }

    /// Name this tracker was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current minimum.
    #[inline]
    pub fn value(&self) -> i64 {
        self.value.load(Ordering::SeqCst)
    }
}
