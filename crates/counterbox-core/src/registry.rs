//! The `CounterBox` registry: name -> metric, per namespace.
//!
//! Counters, maxima, and minima are three independent namespaces; the same
//! name may exist in all three at once. One `RwLock` guards structural
//! mutation across all of them. Creation is rare next to updates, so the
//! shared lock is not a contention concern, and updates on handed-out
//! metrics never take it at all.

use std::collections::HashMap;
use std::io;
use std::sync::{Arc, PoisonError, RwLock};

use crate::counter::Counter;
use crate::snapshot::Snapshot;
use crate::tracker::{MaxTracker, MinTracker};

#[derive(Default)]
struct Namespaces {
    counters: HashMap<String, Arc<Counter>>,
    max: HashMap<String, Arc<MaxTracker>>,
    min: HashMap<String, Arc<MinTracker>>,
}

/// Keeps references to every metric requested from it.
///
/// Construct one per process and hand out `Arc<CounterBox>` clones to every
/// component that records metrics; there is no ambient global instance.
/// Metrics are created on first request and live as long as the box: no
/// removal, no reset.
#[derive(Default)]
pub struct CounterBox {
    inner: RwLock<Namespaces>,
}

impl CounterBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counter of the given name, created at 0 if absent.
    ///
    /// Exactly-once creation: a shared-lock probe first, then an exclusive
    /// lookup-then-insert on miss so a racing creator is observed instead of
    /// clobbered. Concurrent callers for the same name always end up holding
    /// the same instance.
    pub fn counter(&self, name: &str) -> Arc<Counter> {
        if let Some(c) = self.read().counters.get(name) {
            return Arc::clone(c);
        }
        let mut ns = self.write();
        Arc::clone(
            ns.counters
                .entry(name.to_owned())
                .or_insert_with(|| {
                    tracing::debug!(name, "creating counter");
                    Arc::new(Counter::new(name.to_owned()))
                }),
        )
    }

    /// Maximum tracker of the given name, created at 0 if absent.
    pub fn max(&self, name: &str) -> Arc<MaxTracker> {
        if let Some(m) = self.read().max.get(name) {
            return Arc::clone(m);
        }
        let mut ns = self.write();
        Arc::clone(ns.max.entry(name.to_owned()).or_insert_with(|| {
            tracing::debug!(name, "creating max tracker");
            Arc::new(MaxTracker::new(name.to_owned()))
        }))
    }

    /// Minimum tracker of the given name, created at 0 if absent.
    pub fn min(&self, name: &str) -> Arc<MinTracker> {
        if let Some(m) = self.read().min.get(name) {
            return Arc::clone(m);
        }
        let mut ns = self.write();
        Arc::clone(ns.min.entry(name.to_owned()).or_insert_with(|| {
            tracing::debug!(name, "creating min tracker");
            Arc::new(MinTracker::new(name.to_owned()))
        }))
    }

    /// Copy every metric's name and current value into an owned [`Snapshot`].
    ///
    /// Runs under the shared lock, so new-metric creation blocks for the
    /// duration of the copy but value updates do not. Values of different
    /// metrics may be read at slightly different instants; each individual
    /// 64-bit read is torn-free. Entries are sorted by name so renderings
    /// are deterministic.
    pub fn snapshot(&self) -> Snapshot {
        let ns = self.read();
        let mut snap = Snapshot {
            counters: ns
                .counters
                .values()
                .map(|c| (c.name().to_owned(), c.value()).into())
                .collect(),
            max: ns
                .max
                .values()
                .map(|m| (m.name().to_owned(), m.value()).into())
                .collect(),
            min: ns
                .min
                .values()
                .map(|m| (m.name().to_owned(), m.value()).into())
                .collect(),
        };
        drop(ns);
        snap.sort();
        snap
    }

    /// Stream the text dump of a fresh snapshot into `w`.
    ///
    /// The snapshot is taken (and the lock released) before any byte is
    /// written, so a slow sink never holds up metric creation.
    pub fn write_to(&self, w: &mut impl io::Write) -> io::Result<()> {
        write!(w, "{}", self.snapshot())
    }

    // Every critical section is a lookup or a single insert, so the maps
    // stay consistent even if a lock holder panicked. Take over a poisoned
    // guard rather than propagate the panic.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, Namespaces> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Namespaces> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
