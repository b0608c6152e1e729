//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Requested result does not exist
    #[error("{0}")]
    NotFound(String),

    /// Caller supplied unusable input
    #[error("{0}")]
    InvalidInput(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
