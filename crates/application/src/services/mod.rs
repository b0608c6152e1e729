//! Application services - Use case implementations

mod destination_service;
mod journey_service;

pub use destination_service::{
    DEFAULT_HOME_RADIUS_METERS, DEFAULT_PIN_TTL, DestinationService, DestinationSettings,
};
pub use journey_service::{JourneyDetails, JourneyInfo, JourneyService, MAP_LINK_PREFIX, TripDetails};
