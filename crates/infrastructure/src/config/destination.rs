//! Destination policy configuration.

use std::time::Duration;

use application::services::{DEFAULT_HOME_RADIUS_METERS, DEFAULT_PIN_TTL, DestinationSettings};
use domain::GeoLocation;
use serde::{Deserialize, Deserializer, Serialize};

/// Home/away coordinates and pin lifetime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationConfig {
    /// Home coordinate, as `"lat;lon"` or `{latitude, longitude}`
    #[serde(deserialize_with = "deserialize_coordinate")]
    pub home: GeoLocation,

    /// Destination used while at home
    #[serde(deserialize_with = "deserialize_coordinate")]
    pub away: GeoLocation,

    /// Radius of the home zone in meters
    #[serde(default = "default_home_radius_meters")]
    pub home_radius_meters: f64,

    /// Lifetime of a pinned destination in seconds
    #[serde(default = "default_pin_ttl_secs")]
    pub pin_ttl_secs: u64,
}

const fn default_home_radius_meters() -> f64 {
    DEFAULT_HOME_RADIUS_METERS
}

const fn default_pin_ttl_secs() -> u64 {
    DEFAULT_PIN_TTL.as_secs()
}

impl DestinationConfig {
    /// Convert to the application's `DestinationSettings`
    #[must_use]
    pub const fn to_settings(&self) -> DestinationSettings {
        DestinationSettings {
            home: self.home,
            away: self.away,
            home_radius_meters: self.home_radius_meters,
            pin_ttl: Duration::from_secs(self.pin_ttl_secs),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CoordinateSetting {
    Text(String),
    Table { latitude: f64, longitude: f64 },
}

fn deserialize_coordinate<'de, D>(deserializer: D) -> Result<GeoLocation, D::Error>
where
    D: Deserializer<'de>,
{
    match CoordinateSetting::deserialize(deserializer)? {
        CoordinateSetting::Text(text) => text.parse().map_err(serde::de::Error::custom),
        CoordinateSetting::Table {
            latitude,
            longitude,
        } => Ok(GeoLocation::new(latitude, longitude)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_coordinates() {
        let config: DestinationConfig =
            serde_json::from_str(r#"{"home": "52.525;13.369", "away": " 52.39 ; 13.06 "}"#)
                .unwrap();
        assert_eq!(config.home, GeoLocation::new(52.525, 13.369));
        assert_eq!(config.away, GeoLocation::new(52.39, 13.06));
        assert!((config.home_radius_meters - 500.0).abs() < f64::EPSILON);
        assert_eq!(config.pin_ttl_secs, 3600);
    }

    #[test]
    fn test_table_coordinates() {
        let config: DestinationConfig = serde_json::from_str(
            r#"{
                "home": {"latitude": 52.525, "longitude": 13.369},
                "away": "52.39;13.06",
                "home_radius_meters": 250.0,
                "pin_ttl_secs": 60
            }"#,
        )
        .unwrap();
        let settings = config.to_settings();
        assert_eq!(settings.home, GeoLocation::new(52.525, 13.369));
        assert_eq!(settings.pin_ttl, Duration::from_secs(60));
        assert!((settings.home_radius_meters - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_malformed_coordinates() {
        let result: Result<DestinationConfig, _> =
            serde_json::from_str(r#"{"home": "52.525,13.369", "away": "52.39;13.06"}"#);
        assert!(result.is_err());
    }
}
