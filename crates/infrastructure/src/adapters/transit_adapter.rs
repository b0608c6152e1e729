//! Transit adapter - Implements TransitPort using integration_transit

use application::error::ApplicationError;
use application::ports::{JourneyLeg, PlannedJourney, TransitPort};
use async_trait::async_trait;
use domain::GeoLocation;
use integration_transit::{HafasTransitClient, Journey, Leg, TransitClient, TransitError};
use tracing::{instrument, warn};

/// Adapter for public transit journeys using HAFAS (transport.rest)
pub struct TransitAdapter {
    client: HafasTransitClient,
}

impl std::fmt::Debug for TransitAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitAdapter")
            .field("client", &"HafasTransitClient")
            .finish()
    }
}

impl TransitAdapter {
    /// Create a new transit adapter
    pub const fn new(client: HafasTransitClient) -> Self {
        Self { client }
    }

    fn convert_journey(journey: Journey) -> PlannedJourney {
        PlannedJourney {
            refresh_token: journey.refresh_token,
            legs: journey.legs.into_iter().map(Self::convert_leg).collect(),
        }
    }

    fn convert_leg(leg: Leg) -> JourneyLeg {
        JourneyLeg {
            line: leg.line.and_then(|l| l.name),
            origin: leg.origin.name,
            destination: leg.destination.name,
            direction: leg.direction,
            departure: leg.departure,
            planned_departure: leg.planned_departure,
            arrival: leg.arrival,
            departure_delay_secs: leg.departure_delay,
            arrival_delay_secs: leg.arrival_delay,
            departure_platform: leg.departure_platform,
            arrival_platform: leg.arrival_platform,
            walking: leg.walking,
            distance_meters: leg.distance,
        }
    }
}

fn map_transit_error(e: TransitError) -> ApplicationError {
    ApplicationError::ExternalService(format!("Transit search failed: {e}"))
}

#[async_trait]
impl TransitPort for TransitAdapter {
    #[instrument(skip(self))]
    async fn search_journeys(
        &self,
        from: &GeoLocation,
        to: &GeoLocation,
    ) -> Result<Vec<PlannedJourney>, ApplicationError> {
        let response = self.client.search_journeys(from, to).await.map_err(|e| {
            warn!(error = %e, "Transit search failed");
            map_transit_error(e)
        })?;

        Ok(response
            .journeys
            .into_iter()
            .map(Self::convert_journey)
            .collect())
    }
}
