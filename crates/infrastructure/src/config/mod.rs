//! Application configuration
//!
//! Split into focused sub-modules by concern:
//! - `server`: HTTP server settings and log format
//! - `security`: API token
//! - `integrations`: Traccar, transit, Google Maps
//! - `destination`: home/away coordinates and pin lifetime
//!
//! Values come from an optional `config.toml` in the working directory,
//! overridden by `TRAIN_INFO_`-prefixed environment variables with `__`
//! between nested keys (e.g. `TRAIN_INFO_TRACCAR__DEVICE_ID=3`).

mod destination;
mod integrations;
mod security;
mod server;

use config::{ConfigBuilder, ConfigError, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};

pub use destination::DestinationConfig;
pub use integrations::{MapsAppConfig, TraccarAppConfig, TransitAppConfig};
pub use security::SecurityConfig;
pub use server::{LogFormat, ServerConfig};

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "TRAIN_INFO";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Security configuration
    pub security: SecurityConfig,

    /// Traccar configuration
    pub traccar: TraccarAppConfig,

    /// Transit configuration
    #[serde(default)]
    pub transit: TransitAppConfig,

    /// Google Maps configuration
    pub maps: MapsAppConfig,

    /// Destination policy configuration
    pub destination: DestinationConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::builder()?
            // Load from file if exists
            .add_source(File::with_name("config").required(false))
            // Override with environment variables (e.g., TRAIN_INFO_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from TOML text only
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)
    }

    /// Reject configurations the server cannot run with
    ///
    /// # Errors
    ///
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if !self.security.has_token() {
            return Err("security.api_token must not be empty".to_string());
        }
        if self.traccar.base_url.is_empty() {
            return Err("traccar.base_url must not be empty".to_string());
        }
        if self.traccar.username.is_empty() {
            return Err("traccar.username must not be empty".to_string());
        }
        if self.transit.base_url.is_empty() {
            return Err("transit.base_url must not be empty".to_string());
        }
        if self.maps.places_base_url.is_empty() {
            return Err("maps.places_base_url must not be empty".to_string());
        }

        let timeouts = [
            ("traccar", self.traccar.timeout_secs),
            ("transit", self.transit.timeout_secs),
            ("maps", self.maps.timeout_secs),
        ];
        if let Some((section, _)) = timeouts.iter().find(|(_, secs)| *secs == 0) {
            return Err(format!("{section}.timeout_secs must be greater than 0"));
        }

        let radius = self.destination.home_radius_meters;
        if radius.is_nan() || radius <= 0.0 {
            return Err("destination.home_radius_meters must be positive".to_string());
        }
        if self.destination.pin_ttl_secs == 0 {
            return Err("destination.pin_ttl_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
