//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, middleware::BearerAuthLayer, state::AppState};

/// Create the main router with all routes
///
/// Everything except `/health` requires the bearer token.
pub fn create_router(state: AppState) -> Router {
    let auth = BearerAuthLayer::new(state.api_token.clone());

    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Journey API
        .route("/journey/info", get(handlers::journey::journey_info))
        .route("/journey/details", get(handlers::journey::journey_details))
        .route("/journey/destination", post(handlers::journey::set_destination))
        .route(
            "/journey/destination/gmaps",
            post(handlers::journey::set_destination_from_map_link),
        )
        .layer(auth)
        // Attach state
        .with_state(state)
}
