//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod maps_adapter;
mod traccar_adapter;
mod transit_adapter;

pub use maps_adapter::MapsAdapter;
pub use traccar_adapter::TraccarPositionAdapter;
pub use transit_adapter::TransitAdapter;
