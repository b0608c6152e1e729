//! Geographic location value object

use std::fmt;
use std::str::FromStr;

use geo::{Distance, Geodesic, Point};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A geographic location with latitude and longitude in degrees
///
/// Coordinates are taken as-is; range checks are left to the upstream
/// services that consume them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    latitude: f64,
    longitude: f64,
}

impl GeoLocation {
    /// Create a new location
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Geodesic distance to another location in meters
    ///
    /// Computed on the WGS-84 ellipsoid (Karney's algorithm).
    #[must_use]
    pub fn distance_meters(&self, other: &Self) -> f64 {
        Geodesic.distance(self.to_point(), other.to_point())
    }

    /// Whether `other` lies strictly inside the circle of `radius_meters` around `self`
    #[must_use]
    pub fn is_within(&self, other: &Self, radius_meters: f64) -> bool {
        self.distance_meters(other) < radius_meters
    }

    fn to_point(self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Parses the `"<lat>;<lon>"` form used in configuration
impl FromStr for GeoLocation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(';')
            .ok_or_else(|| DomainError::InvalidCoordinates(format!("expected 'lat;lon', got '{s}'")))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| DomainError::InvalidCoordinates(format!("'{part}': {e}")))
        };

        Ok(Self::new(parse(lat)?, parse(lon)?))
    }
}
