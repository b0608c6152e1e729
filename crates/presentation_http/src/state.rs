//! Application state shared across handlers

use std::sync::Arc;

use application::JourneyService;
use secrecy::SecretString;

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Journey use cases
    pub journey_service: Arc<JourneyService>,
    /// Token required on `/journey` routes
    pub api_token: SecretString,
}
