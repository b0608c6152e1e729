//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates could not be parsed from their text form
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),
}
