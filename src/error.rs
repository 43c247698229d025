//! Startup failure classes.
//!
//! Anything that goes wrong on the request path is answered in-band as an
//! HTTP response and never becomes one of these.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    /// Two declared routes share a path; the registry refuses to build.
    #[error("duplicate route path declared: {0}")]
    DuplicateRoute(String),

    #[error("invalid {name} value: {value:?}")]
    InvalidConfig { name: &'static str, value: String },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
