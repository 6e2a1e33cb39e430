//! Shared application state for the counterbox server.

use std::sync::Arc;

use counterbox_core::CounterBox;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    metrics: Arc<CounterBox>,
}

impl AppState {
    /// State around a fresh, empty registry.
    pub fn new(cfg: ServerConfig) -> Self {
        Self::with_registry(cfg, Arc::new(CounterBox::new()))
    }

    /// State around a registry the host process already records into.
    ///
    /// This is the usual production shape: construct one `CounterBox` at
    /// startup, hand clones to everything that records metrics, and hand one
    /// clone here so the endpoints serve live values.
    pub fn with_registry(cfg: ServerConfig, metrics: Arc<CounterBox>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, metrics }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> Arc<CounterBox> {
        Arc::clone(&self.inner.metrics)
    }
}
