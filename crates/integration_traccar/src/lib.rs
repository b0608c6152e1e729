//! Traccar integration for TrainInfo
//!
//! Looks up the last reported position of a single tracked device on a
//! [Traccar](https://www.traccar.org) server. The device record points at its
//! latest position fix, which is fetched in a second request.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_traccar::{HttpTraccarClient, TraccarClient, TraccarConfig};
//!
//! let client = HttpTraccarClient::new(config)?;
//! let here = client.current_position().await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{HttpTraccarClient, TraccarClient};
pub use config::TraccarConfig;
pub use error::TraccarError;
pub use models::{Device, Position};
