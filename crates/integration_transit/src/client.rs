//! HAFAS transit client via transport.rest API
//!
//! Provides journey planning between two coordinates using the public
//! [v6.db.transport.rest](https://v6.db.transport.rest) API.

use std::time::Duration;

use async_trait::async_trait;
use domain::GeoLocation;
use reqwest::{Client, header::ACCEPT};
use tracing::{debug, instrument, warn};

use crate::config::TransitConfig;
use crate::error::TransitError;
use crate::models::TransitResponse;

/// Trait for transit service clients
#[async_trait]
pub trait TransitClient: Send + Sync {
    /// Search for journeys between two coordinate pairs
    async fn search_journeys(
        &self,
        from: &GeoLocation,
        to: &GeoLocation,
    ) -> Result<TransitResponse, TransitError>;
}

/// HAFAS-based transit client using the transport.rest API
#[derive(Debug)]
pub struct HafasTransitClient {
    client: Client,
    config: TransitConfig,
}

impl HafasTransitClient {
    /// Create a new HAFAS transit client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &TransitConfig) -> Result<Self, TransitError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("TrainInfo/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransitError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Query parameters for a coordinate-to-coordinate journey search
    ///
    /// The API requires an address label for coordinate endpoints; the labels
    /// themselves are never shown.
    fn journey_params(from: &GeoLocation, to: &GeoLocation) -> [(&'static str, String); 6] {
        [
            ("from.latitude", from.latitude().to_string()),
            ("from.longitude", from.longitude().to_string()),
            ("to.latitude", to.latitude().to_string()),
            ("to.longitude", to.longitude().to_string()),
            ("from.address", "start".to_string()),
            ("to.address", "stop".to_string()),
        ]
    }

    /// Parse the raw HAFAS JSON journey response
    fn parse_journeys_response(body: &str) -> Result<TransitResponse, TransitError> {
        serde_json::from_str(body).map_err(|e| TransitError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl TransitClient for HafasTransitClient {
    #[instrument(skip_all, fields(from = %from, to = %to))]
    async fn search_journeys(
        &self,
        from: &GeoLocation,
        to: &GeoLocation,
    ) -> Result<TransitResponse, TransitError> {
        let url = format!("{}/journeys", self.config.base());

        debug!(?url, "Searching journeys");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .query(&Self::journey_params(from, to))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransitError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    TransitError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TransitError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        if !status.is_success() {
            return Err(TransitError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransitError::ParseError(e.to_string()))?;

        let result = Self::parse_journeys_response(&body)?;

        if result.journeys.is_empty() {
            warn!("No journeys found");
        }

        debug!(count = result.journeys.len(), "Journeys found");
        Ok(result)
    }
}
