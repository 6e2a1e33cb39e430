//! counterbox server library entry.
//!
//! Wires the config layer, shared state, and operational HTTP endpoints
//! around a `counterbox_core::CounterBox`. Consumed by the binary
//! (`main.rs`), by host processes that embed the router, and by tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod ops;
pub mod router;

pub use error::{Result, ServerError};
