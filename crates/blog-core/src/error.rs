//! Domain-level error types.

use thiserror::Error;

/// Failures of the data access layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BlogError {
    /// The request never reached the store (connection refused, DNS, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// The store answered with a failure status.
    #[error("Server responded with status {status}: {message}")]
    Server { status: u16, message: String },

    /// The draft was rejected, either locally or by the store.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The store answered with a body that is not a post or post list.
    #[error("Malformed response: {0}")]
    Decode(String),
}

/// Coarse classification used by the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Server,
    Validation,
}

impl BlogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogError::Network(_) => ErrorKind::Network,
            BlogError::Server { .. } | BlogError::Decode(_) => ErrorKind::Server,
            BlogError::Validation(_) => ErrorKind::Validation,
        }
    }
}
