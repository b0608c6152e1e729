//! Domain layer for TrainInfo
//!
//! Contains the value objects and domain errors shared by every other crate.
//! This layer performs no I/O.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::*;
