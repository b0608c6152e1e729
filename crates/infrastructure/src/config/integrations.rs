//! Integration configurations: Traccar, transit, Google Maps.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

// ==============================
// Traccar Configuration
// ==============================

/// Traccar server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraccarAppConfig {
    /// Server base URL
    pub base_url: String,

    /// Username for basic auth
    pub username: String,

    /// Password for basic auth (sensitive - uses `SecretString`)
    #[serde(skip_serializing)]
    pub password: SecretString,

    /// Identifier of the tracked device
    pub device_id: i64,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl TraccarAppConfig {
    /// Convert to `integration_traccar`'s `TraccarConfig`
    #[must_use]
    pub fn to_traccar_config(&self) -> integration_traccar::TraccarConfig {
        integration_traccar::TraccarConfig {
            base_url: self.base_url.clone(),
            username: self.username.clone(),
            password: self.password.expose_secret().to_string(),
            device_id: self.device_id,
            timeout_secs: self.timeout_secs,
        }
    }
}

// ==============================
// Transit Configuration
// ==============================

/// Public transit (transport.rest) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitAppConfig {
    /// Base URL of the journeys API
    #[serde(default = "default_transit_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_transit_base_url() -> String {
    "https://v6.db.transport.rest".to_string()
}

impl Default for TransitAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_transit_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl TransitAppConfig {
    /// Convert to `integration_transit`'s `TransitConfig`
    #[must_use]
    pub fn to_transit_config(&self) -> integration_transit::TransitConfig {
        integration_transit::TransitConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

// ==============================
// Google Maps Configuration
// ==============================

/// Google Places configuration for map-link resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapsAppConfig {
    /// Places API key (sensitive - uses `SecretString`)
    #[serde(skip_serializing)]
    pub api_key: SecretString,

    /// Base URL of the Places API
    #[serde(default = "default_places_base_url")]
    pub places_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_places_base_url() -> String {
    "https://maps.googleapis.com".to_string()
}

impl MapsAppConfig {
    /// Convert to `integration_maps`'s `MapsConfig`
    #[must_use]
    pub fn to_maps_config(&self) -> integration_maps::MapsConfig {
        integration_maps::MapsConfig {
            api_key: self.api_key.expose_secret().to_string(),
            places_base_url: self.places_base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

const fn default_timeout_secs() -> u64 {
    10
}
