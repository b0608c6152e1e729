//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer on top of the
//! Traccar, transit and Google Maps clients, and owns configuration loading
//! and log setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AppConfig, DestinationConfig, LogFormat, MapsAppConfig, SecurityConfig, ServerConfig,
    TraccarAppConfig, TransitAppConfig,
};
pub use telemetry::{DEFAULT_LOG_FILTER, TelemetryError, init_logging};
