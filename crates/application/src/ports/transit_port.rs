//! Public transit journey port
//!
//! Defines the interface for coordinate-to-coordinate journey search.
//! Adapters in the infrastructure layer implement this port using transit APIs.

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use domain::GeoLocation;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// A journey suggested by the transit service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannedJourney {
    /// Token to refresh this journey for real-time updates
    pub refresh_token: Option<String>,
    /// Legs in travel order
    pub legs: Vec<JourneyLeg>,
}

impl PlannedJourney {
    /// First leg that is an actual ride rather than a walk
    #[must_use]
    pub fn first_ride(&self) -> Option<&JourneyLeg> {
        self.legs.iter().find(|leg| !leg.walking)
    }
}

/// A single leg of a journey
///
/// Every field except `walking` may be missing upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JourneyLeg {
    /// Departure stop name
    pub origin: Option<String>,
    /// Arrival stop name
    pub destination: Option<String>,
    /// Line name (e.g., "S5", "Bus 248")
    pub line: Option<String>,
    /// Travel direction shown on the vehicle
    pub direction: Option<String>,
    /// Real-time departure
    pub departure: Option<DateTime<FixedOffset>>,
    /// Scheduled departure
    pub planned_departure: Option<DateTime<FixedOffset>>,
    /// Real-time arrival
    pub arrival: Option<DateTime<FixedOffset>>,
    /// Departure delay in seconds (None = unknown, 0 = on time)
    pub departure_delay_secs: Option<i64>,
    /// Arrival delay in seconds
    pub arrival_delay_secs: Option<i64>,
    /// Departure platform
    pub departure_platform: Option<String>,
    /// Arrival platform
    pub arrival_platform: Option<String>,
    /// Whether this is a walking transfer
    pub walking: bool,
    /// Walking distance in meters
    pub distance_meters: Option<u32>,
}

impl JourneyLeg {
    /// Scheduled departure, falling back to the real-time one
    #[must_use]
    pub fn scheduled_departure(&self) -> Option<DateTime<FixedOffset>> {
        self.planned_departure.or(self.departure)
    }
}

impl fmt::Display for JourneyLeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = if self.walking {
            "walk"
        } else {
            self.line.as_deref().unwrap_or("?")
        };
        write!(
            f,
            "{line}: {} → {}",
            self.origin.as_deref().unwrap_or("?"),
            self.destination.as_deref().unwrap_or("?")
        )
    }
}

/// Port for public transit operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TransitPort: Send + Sync {
    /// Search journeys between two coordinates, best first
    async fn search_journeys(
        &self,
        from: &GeoLocation,
        to: &GeoLocation,
    ) -> Result<Vec<PlannedJourney>, ApplicationError>;
}
