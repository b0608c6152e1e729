//! TrainInfo HTTP presentation layer
//!
//! This crate provides the HTTP API for TrainInfo.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod shutdown;
pub mod state;

pub use error::ApiError;
pub use middleware::BearerAuthLayer;
pub use routes::create_router;
pub use state::AppState;
