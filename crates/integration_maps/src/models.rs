//! Places Details API response

use domain::GeoLocation;
use serde::Deserialize;

/// Response of `/maps/api/place/details/json`
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDetailsResponse {
    /// API status, `OK` on success
    #[serde(default)]
    pub status: Option<String>,
    /// Error explanation for non-OK statuses
    #[serde(default)]
    pub error_message: Option<String>,
    /// Place record
    #[serde(default)]
    pub result: Option<PlaceResult>,
}

/// Place record
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceResult {
    /// Place geometry
    pub geometry: Geometry,
}

/// Place geometry
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    /// Reference point of the place
    pub location: LatLng,
}

/// Coordinate pair as Google writes it
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl PlaceDetailsResponse {
    /// Location of the place, if present
    #[must_use]
    pub fn location(&self) -> Option<GeoLocation> {
        self.result
            .as_ref()
            .map(|r| GeoLocation::new(r.geometry.location.lat, r.geometry.location.lng))
    }
}
