//! Traccar error types

use thiserror::Error;

/// Errors that can occur while talking to the Traccar server
#[derive(Debug, Error)]
pub enum TraccarError {
    /// Connection to the server failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Server rejected the configured credentials
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// Server answered with a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Device or position record is missing
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of record that was looked up
        entity: &'static str,
        /// Identifier that was looked up
        id: i64,
    },

    /// Device has never reported a position
    #[error("Device {0} has no position yet")]
    NoPosition(i64),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}
