//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod place_resolver_port;
mod position_port;
mod transit_port;

#[cfg(test)]
pub use place_resolver_port::MockPlaceResolverPort;
pub use place_resolver_port::PlaceResolverPort;
#[cfg(test)]
pub use position_port::MockPositionPort;
pub use position_port::PositionPort;
#[cfg(test)]
pub use transit_port::MockTransitPort;
pub use transit_port::{JourneyLeg, PlannedJourney, TransitPort};
