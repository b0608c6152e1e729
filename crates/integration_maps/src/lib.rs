//! Google Maps integration for TrainInfo
//!
//! Turns a shared `maps.app.goo.gl` short link into coordinates. The short
//! link redirects to a long URL that embeds the place's feature id; the second
//! half of that id is the place CID, which the Places Details API resolves to
//! a location.
//!
//! [`MapLinkResolver`] defines the interface, implemented by
//! [`GoogleMapsResolver`].

mod client;
mod config;
mod error;
mod models;

pub use client::{GoogleMapsResolver, MapLinkResolver};
pub use config::MapsConfig;
pub use error::MapsError;
pub use models::PlaceDetailsResponse;
