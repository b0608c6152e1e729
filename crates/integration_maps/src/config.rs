//! Google Maps configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Google Places API
#[derive(Clone, Serialize, Deserialize)]
pub struct MapsConfig {
    /// Places API key
    #[serde(skip_serializing)]
    pub api_key: String,

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

const fn default_timeout_secs() -> u64 {
    10
}

impl MapsConfig {
    /// Create a configuration with default endpoints
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            places_base_url: default_places_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for MapsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapsConfig")
            .field("api_key", &"[REDACTED]")
            .field("places_base_url", &self.places_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
