//! Journey handlers
//!
//! Endpoints for the next departure towards the current destination and for
//! pinning a destination.

use application::{JourneyDetails, JourneyInfo};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use domain::GeoLocation;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for pinning a destination
#[derive(Debug, Deserialize)]
pub struct DestinationRequest {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

/// Empty JSON object acknowledging a change
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Acknowledged {}

/// Coordinates resolved from a map link
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ResolvedPlace {
    pub lat: f64,
    pub lng: f64,
}

impl From<GeoLocation> for ResolvedPlace {
    fn from(loc: GeoLocation) -> Self {
        Self {
            lat: loc.latitude(),
            lng: loc.longitude(),
        }
    }
}

/// Next ride towards the current destination
#[instrument(skip(state))]
pub async fn journey_info(State(state): State<AppState>) -> Result<Json<JourneyInfo>, ApiError> {
    let info = state.journey_service.journey_info().await?;
    Ok(Json(info))
}

/// All suggested journeys with their legs
#[instrument(skip(state))]
pub async fn journey_details(
    State(state): State<AppState>,
) -> Result<Json<Vec<JourneyDetails>>, ApiError> {
    let details = state.journey_service.journey_details().await?;
    Ok(Json(details))
}

/// Pin a destination given as coordinates
#[instrument(skip(state, body))]
pub async fn set_destination(
    State(state): State<AppState>,
    body: Result<Json<DestinationRequest>, JsonRejection>,
) -> Result<Json<Acknowledged>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let location = GeoLocation::new(request.latitude, request.longitude);

    info!(%location, "Destination set via coordinates");
    state.journey_service.set_destination(location);
    Ok(Json(Acknowledged {}))
}

/// Pin the destination behind a shared Google Maps link sent as plain text
#[instrument(skip(state, body))]
pub async fn set_destination_from_map_link(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ResolvedPlace>, ApiError> {
    let location = state
        .journey_service
        .set_destination_from_map_link(&body)
        .await?;

    info!(%location, "Destination set via map link");
    Ok(Json(ResolvedPlace::from(location)))
}
