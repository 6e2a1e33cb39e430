//! Top-level facade crate for counterbox.
//!
//! Re-exports the core registry types and the server library so users can
//! depend on a single crate.

pub use counterbox_core::{Counter, CounterBox, MaxTracker, MetricValue, MinTracker, Snapshot};

pub mod server {
    pub use counterbox_server::*;
}
