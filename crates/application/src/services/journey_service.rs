//! Journey use cases
//!
//! Chains the device position, the destination policy and the journey search,
//! and reshapes the transit answer into the views served over HTTP.

use std::sync::Arc;

use domain::GeoLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{JourneyLeg, PlaceResolverPort, PlannedJourney, PositionPort, TransitPort};
use crate::services::DestinationService;

/// Only short links from this host are accepted as map links
pub const MAP_LINK_PREFIX: &str = "https://maps.app.goo.gl";

const NO_GOOD_JOURNEY: &str = "Could not find good journey";
const INVALID_MAP_LINK: &str = "Invalid gmaps link";

/// Summary of the next ride
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyInfo {
    /// Line name
    pub line: Option<String>,
    /// Boarding stop
    pub from: Option<String>,
    /// Direction of the vehicle
    pub to: Option<String>,
    /// Departure delay in minutes
    pub delay: Option<f64>,
    /// Departure platform
    pub platform: Option<String>,
    /// Scheduled departure as `HH:MM` local to the stop
    pub departure: String,
}

/// One journey with all of its legs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyDetails {
    /// Token to refresh this journey upstream
    pub refresh_token: Option<String>,
    /// Legs in travel order
    pub trips: Vec<TripDetails>,
}

/// One leg of a journey with epoch timestamps and minute delays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDetails {
    pub departure: Option<i64>,
    pub departure_delay: Option<i64>,
    pub departure_platform: Option<String>,
    pub arrival: Option<i64>,
    pub arrival_delay: Option<i64>,
    pub arrival_platform: Option<String>,
    pub direction: Option<String>,
    pub walking: bool,
    pub distance: Option<u32>,
    pub line: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl From<&JourneyLeg> for TripDetails {
    fn from(leg: &JourneyLeg) -> Self {
        Self {
            departure: leg.departure.map(|t| t.timestamp()),
            departure_delay: leg.departure_delay_secs.map(whole_minutes),
            departure_platform: leg.departure_platform.clone(),
            arrival: leg.arrival.map(|t| t.timestamp()),
            arrival_delay: leg.arrival_delay_secs.map(whole_minutes),
            arrival_platform: leg.arrival_platform.clone(),
            direction: leg.direction.clone(),
            walking: leg.walking,
            distance: leg.distance_meters,
            line: leg.line.clone(),
            from: leg.origin.clone(),
            to: leg.destination.clone(),
        }
    }
}

impl From<&PlannedJourney> for JourneyDetails {
    fn from(journey: &PlannedJourney) -> Self {
        Self {
            refresh_token: journey.refresh_token.clone(),
            trips: journey.legs.iter().map(TripDetails::from).collect(),
        }
    }
}

/// Seconds to whole minutes, truncated toward zero
const fn whole_minutes(secs: i64) -> i64 {
    secs / 60
}

#[allow(clippy::cast_precision_loss)]
fn fractional_minutes(secs: i64) -> f64 {
    secs as f64 / 60.0
}

impl TryFrom<&JourneyLeg> for JourneyInfo {
    type Error = ApplicationError;

    fn try_from(leg: &JourneyLeg) -> Result<Self, Self::Error> {
        let departure = leg.scheduled_departure().ok_or_else(|| {
            ApplicationError::Internal(format!("leg without departure time: {leg}"))
        })?;

        Ok(Self {
            line: leg.line.clone(),
            from: leg.origin.clone(),
            to: leg.direction.clone(),
            delay: leg.departure_delay_secs.map(fractional_minutes),
            platform: leg.departure_platform.clone(),
            departure: departure.format("%H:%M").to_string(),
        })
    }
}

/// Journey use cases behind the HTTP API
pub struct JourneyService {
    position: Arc<dyn PositionPort>,
    transit: Arc<dyn TransitPort>,
    places: Arc<dyn PlaceResolverPort>,
    destination: DestinationService,
}

impl std::fmt::Debug for JourneyService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JourneyService")
            .field("destination", &self.destination)
            .finish_non_exhaustive()
    }
}

impl JourneyService {
    /// Create a new journey service
    pub fn new(
        position: Arc<dyn PositionPort>,
        transit: Arc<dyn TransitPort>,
        places: Arc<dyn PlaceResolverPort>,
        destination: DestinationService,
    ) -> Self {
        Self {
            position,
            transit,
            places,
            destination,
        }
    }

    /// Destination policy in use
    pub const fn destination(&self) -> &DestinationService {
        &self.destination
    }

    /// Journeys from the device position to the selected destination
    async fn current_journeys(&self) -> Result<Vec<PlannedJourney>, ApplicationError> {
        let position = self.position.current_position().await?;
        let target = self.destination.select_destination(&position);
        debug!(from = %position, to = %target, "Searching journeys");

        self.transit.search_journeys(&position, &target).await
    }

    /// Summary of the first ride of the best journey
    #[instrument(skip(self))]
    pub async fn journey_info(&self) -> Result<JourneyInfo, ApplicationError> {
        let journeys = self.current_journeys().await?;

        let Some(leg) = journeys.first().and_then(PlannedJourney::first_ride) else {
            warn!(journeys = journeys.len(), "No journey with a ride found");
            return Err(ApplicationError::NotFound(NO_GOOD_JOURNEY.to_string()));
        };

        JourneyInfo::try_from(leg)
    }

    /// All suggested journeys with every leg
    #[instrument(skip(self))]
    pub async fn journey_details(&self) -> Result<Vec<JourneyDetails>, ApplicationError> {
        let journeys = self.current_journeys().await?;
        Ok(journeys.iter().map(JourneyDetails::from).collect())
    }

    /// Pin a destination given as coordinates
    pub fn set_destination(&self, location: GeoLocation) {
        self.destination.set_pin(location);
    }

    /// Pin the destination a shared map short link points at
    #[instrument(skip(self))]
    pub async fn set_destination_from_map_link(
        &self,
        link: &str,
    ) -> Result<GeoLocation, ApplicationError> {
        let link = link.trim();
        if !link.starts_with(MAP_LINK_PREFIX) {
            return Err(ApplicationError::InvalidInput(INVALID_MAP_LINK.to_string()));
        }

        let location = self.places.resolve_map_link(link).await?;
        self.destination.set_pin(location);
        Ok(location)
    }
}
