//! Traccar API records
//!
//! Only the fields needed to locate a device are modelled; everything else the
//! server sends is ignored.

use domain::GeoLocation;
use serde::Deserialize;

/// A tracked device
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Device identifier
    pub id: i64,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Latest position fix, `0` or absent before the first report
    #[serde(default)]
    pub position_id: Option<i64>,
}

impl Device {
    /// Identifier of the latest position, if the device ever reported one
    #[must_use]
    pub fn latest_position_id(&self) -> Option<i64> {
        self.position_id.filter(|id| *id > 0)
    }
}

/// A single position fix
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Position identifier
    pub id: i64,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl From<&Position> for GeoLocation {
    fn from(position: &Position) -> Self {
        Self::new(position.latitude, position.longitude)
    }
}
