//! Server error surface.
//!
//! Metric operations themselves are total (see `counterbox-core`); the only
//! things that can fail here are loading configuration and binding the
//! listener.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}
