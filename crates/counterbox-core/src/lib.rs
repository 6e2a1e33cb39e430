//! counterbox core: thread-safe named counters, maxima, and minima.
//!
//! All metrics live in a [`CounterBox`]. Producer code asks the box for a
//! handle to a named metric (created lazily on first use) and updates it
//! through per-instance atomics; readers take a [`Snapshot`] and render it.
//! The crate is runtime-agnostic so it can be embedded in any process.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every metric operation is total; the only fallible surface is streaming
//! a rendered snapshot into an `io::Write` sink.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod counter;
pub mod registry;
pub mod snapshot;
pub mod tracker;

pub use counter::Counter;
pub use registry::CounterBox;
pub use snapshot::{MetricValue, Snapshot};
pub use tracker::{MaxTracker, MinTracker};
