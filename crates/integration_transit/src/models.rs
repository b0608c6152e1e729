//! Transit data models
//!
//! Typed representations of journeys, legs, stops and lines as returned by the
//! transport.rest HAFAS API. Timestamps keep the UTC offset the API sent, so
//! local clock times can be displayed without a timezone database.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Response from a journey search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransitResponse {
    /// Found journeys, best first. Absent in the payload means none.
    #[serde(default)]
    pub journeys: Vec<Journey>,
}

/// A complete journey from origin to destination, consisting of one or more legs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    /// Individual legs (segments) of the journey
    #[serde(default)]
    pub legs: Vec<Leg>,
    /// Token to refresh this journey for real-time updates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// A single leg (segment) of a journey
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    /// Origin stop
    #[serde(default)]
    pub origin: Stop,
    /// Destination stop
    #[serde(default)]
    pub destination: Stop,
    /// Actual departure time (includes delay)
    #[serde(default)]
    pub departure: Option<DateTime<FixedOffset>>,
    /// Scheduled departure time
    #[serde(default)]
    pub planned_departure: Option<DateTime<FixedOffset>>,
    /// Actual arrival time (includes delay)
    #[serde(default)]
    pub arrival: Option<DateTime<FixedOffset>>,
    /// Scheduled arrival time
    #[serde(default)]
    pub planned_arrival: Option<DateTime<FixedOffset>>,
    /// Departure delay in seconds (None = unknown, 0 = on time)
    #[serde(default)]
    pub departure_delay: Option<i64>,
    /// Arrival delay in seconds
    #[serde(default)]
    pub arrival_delay: Option<i64>,
    /// Departure platform
    #[serde(default)]
    pub departure_platform: Option<String>,
    /// Arrival platform
    #[serde(default)]
    pub arrival_platform: Option<String>,
    /// Travel direction shown on the vehicle
    #[serde(default)]
    pub direction: Option<String>,
    /// Line information (None for walking legs)
    #[serde(default)]
    pub line: Option<LineInfo>,
    /// Whether this is a walking transfer leg
    #[serde(default)]
    pub walking: bool,
    /// Walking distance in meters (only for walking legs)
    #[serde(default)]
    pub distance: Option<u32>,
}

/// A transit stop (station, bus stop, address, etc.)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Stop {
    /// Unique stop identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Human-readable stop name
    #[serde(default)]
    pub name: Option<String>,
}

/// Information about a transit line (train, bus, etc.)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineInfo {
    /// Display name (e.g., "ICE 1601", "S5", "Bus 248")
    #[serde(default)]
    pub name: Option<String>,
    /// Product type from HAFAS (e.g., "nationalExpress", "suburban", "bus")
    #[serde(default)]
    pub product: Option<String>,
    /// Transport mode (e.g., "train", "bus")
    #[serde(default)]
    pub mode: Option<String>,
}
