//! Destination policy
//!
//! Decides where the next journey should go. A manually pinned stop wins for
//! a limited time; otherwise the tracked position decides between the home
//! coordinate and the configured destination used while at home.

use std::sync::{Arc, Weak};
use std::time::Duration;

use domain::GeoLocation;
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Default radius of the home zone in meters
pub const DEFAULT_HOME_RADIUS_METERS: f64 = 500.0;

/// Default lifetime of a pinned destination
pub const DEFAULT_PIN_TTL: Duration = Duration::from_secs(3600);

/// Fixed inputs of the destination policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DestinationSettings {
    /// Home coordinate
    pub home: GeoLocation,
    /// Destination used while inside the home zone
    pub away: GeoLocation,
    /// Radius of the home zone in meters
    pub home_radius_meters: f64,
    /// How long a pinned destination stays active
    pub pin_ttl: Duration,
}

impl DestinationSettings {
    /// Settings with the default radius and pin lifetime
    #[must_use]
    pub const fn new(home: GeoLocation, away: GeoLocation) -> Self {
        Self {
            home,
            away,
            home_radius_meters: DEFAULT_HOME_RADIUS_METERS,
            pin_ttl: DEFAULT_PIN_TTL,
        }
    }
}

#[derive(Debug, Default)]
struct PinSlot {
    pin: Option<GeoLocation>,
    generation: u64,
    expiry: Option<JoinHandle<()>>,
}

impl PinSlot {
    /// Unset the pin if no newer pin replaced it since `generation` was issued
    fn expire(&mut self, generation: u64) -> bool {
        if self.generation != generation || self.pin.is_none() {
            return false;
        }
        self.pin = None;
        self.expiry = None;
        true
    }
}

/// Owner of the pinned destination and the policy built on it
#[derive(Debug)]
pub struct DestinationService {
    settings: DestinationSettings,
    slot: Arc<Mutex<PinSlot>>,
}

impl DestinationService {
    /// Create a service with no pin
    #[must_use]
    pub fn new(settings: DestinationSettings) -> Self {
        Self {
            settings,
            slot: Arc::new(Mutex::new(PinSlot::default())),
        }
    }

    /// Currently pinned destination, if any
    #[must_use]
    pub fn current_pin(&self) -> Option<GeoLocation> {
        self.slot.lock().pin
    }

    /// Pin a destination, replacing any earlier pin and restarting the expiry
    ///
    /// Must be called from within a Tokio runtime.
    pub fn set_pin(&self, pin: GeoLocation) {
        let ttl = self.settings.pin_ttl;
        let mut slot = self.slot.lock();

        if let Some(previous) = slot.expiry.take() {
            previous.abort();
        }
        slot.generation = slot.generation.wrapping_add(1);
        slot.pin = Some(pin);

        let generation = slot.generation;
        let weak = Arc::downgrade(&self.slot);
        slot.expiry = Some(tokio::spawn(expire_after(weak, generation, ttl)));

        info!(%pin, ttl_secs = ttl.as_secs(), "Special journey stop set");
    }

    /// Remove the pin and cancel its expiry
    pub fn clear_pin(&self) {
        let mut slot = self.slot.lock();
        if let Some(expiry) = slot.expiry.take() {
            expiry.abort();
        }
        slot.generation = slot.generation.wrapping_add(1);
        if slot.pin.take().is_some() {
            info!("Special journey stop cleared");
        }
    }

    /// Choose the destination for a journey starting at `position`
    pub fn select_destination(&self, position: &GeoLocation) -> GeoLocation {
        if let Some(pin) = self.current_pin() {
            info!(destination = %pin, "Using special journey stop");
            return pin;
        }

        let settings = &self.settings;
        let at_home = settings.home.is_within(position, settings.home_radius_meters);
        debug!(at_home, radius_meters = settings.home_radius_meters, "Home zone check");

        if at_home {
            info!(destination = %settings.away, "Using default to position");
            settings.away
        } else {
            info!(destination = %settings.home, "Using home position");
            settings.home
        }
    }
}

impl Drop for DestinationService {
    fn drop(&mut self) {
        if let Some(expiry) = self.slot.lock().expiry.take() {
            expiry.abort();
        }
    }
}

async fn expire_after(slot: Weak<Mutex<PinSlot>>, generation: u64, ttl: Duration) {
    tokio::time::sleep(ttl).await;

    let Some(slot) = slot.upgrade() else {
        return;
    };
    if slot.lock().expire(generation) {
        info!("Special journey stop expired");
    }
}
