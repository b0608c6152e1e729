//! Public transit integration for TrainInfo
//!
//! Provides journey planning via the [transport.rest](https://v6.db.transport.rest) API
//! (HAFAS-based, covering all German public transit).
//!
//! [`TransitClient`] defines the interface, implemented by [`HafasTransitClient`].
//! Journeys are returned mostly as the API delivers them; every field the API may
//! omit is optional on [`Leg`].
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::GeoLocation;
//! use integration_transit::{HafasTransitClient, TransitClient, TransitConfig};
//!
//! let client = HafasTransitClient::new(&TransitConfig::default())?;
//!
//! let response = client
//!     .search_journeys(
//!         &GeoLocation::new(52.520, 13.405), // Berlin origin
//!         &GeoLocation::new(52.525, 13.369), // Berlin destination
//!     )
//!     .await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{HafasTransitClient, TransitClient};
pub use config::TransitConfig;
pub use error::TransitError;
pub use models::{Journey, Leg, LineInfo, Stop, TransitResponse};
