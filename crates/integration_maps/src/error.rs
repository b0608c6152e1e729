//! Map-link resolution error types

use thiserror::Error;

/// Errors that can occur while resolving a map link
#[derive(Debug, Error)]
pub enum MapsError {
    /// Resolver could not be set up
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Connection to a remote service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Short link did not answer with a redirect
    #[error("Link did not redirect (HTTP {0})")]
    NoRedirect(u16),

    /// Redirect target carries no place identifier
    #[error("No place id in link target: {0}")]
    NoPlaceId(String),

    /// Places API answered with a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Places API did not return a location for the id
    #[error("Place not found: {0}")]
    PlaceNotFound(String),

    /// Failed to parse response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}
