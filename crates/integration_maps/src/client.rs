//! Short-link resolver backed by the Google Places API

use std::time::Duration;

use async_trait::async_trait;
use domain::GeoLocation;
use regex::Regex;
use reqwest::{Client, header::LOCATION, redirect};
use tracing::{debug, instrument, warn};

use crate::config::MapsConfig;
use crate::error::MapsError;
use crate::models::PlaceDetailsResponse;

/// Feature id pair `0x<hex>:0x<hex>` in a long Maps URL; the second half is the CID
const FEATURE_ID_PATTERN: &str = r"0x[0-9a-fA-F]+:(0x[0-9a-fA-F]+)";

/// Trait for map-link resolvers
#[async_trait]
pub trait MapLinkResolver: Send + Sync {
    /// Resolve a shared map link to the coordinates of the place it points at
    async fn resolve(&self, link: &str) -> Result<GeoLocation, MapsError>;
}

/// Resolver that expands Google short links and looks the place up by CID
#[derive(Debug)]
pub struct GoogleMapsResolver {
    client: Client,
    config: MapsConfig,
    feature_id: Regex,
}

impl GoogleMapsResolver {
    /// Create a new resolver
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: MapsConfig) -> Result<Self, MapsError> {
        // Redirects must stay visible: the target URL is the payload.
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(redirect::Policy::none())
            .user_agent(concat!("TrainInfo/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MapsError::Configuration(e.to_string()))?;

        let feature_id =
            Regex::new(FEATURE_ID_PATTERN).map_err(|e| MapsError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            config,
            feature_id,
        })
    }

    /// Extract the place CID from a long Maps URL
    fn extract_cid<'a>(&self, target: &'a str) -> Option<&'a str> {
        self.feature_id
            .captures(target)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }

    fn map_send_error(&self, e: &reqwest::Error) -> MapsError {
        if e.is_timeout() {
            MapsError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            MapsError::ConnectionFailed(e.to_string())
        }
    }

    /// Request the short link and return its redirect target
    async fn expand(&self, link: &str) -> Result<String, MapsError> {
        let response = self
            .client
            .get(link)
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let status = response.status();
        if !status.is_redirection() {
            return Err(MapsError::NoRedirect(status.as_u16()));
        }

        response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
            .ok_or(MapsError::NoRedirect(status.as_u16()))
    }

    /// Look up a place by CID
    async fn place_location(&self, cid: &str) -> Result<GeoLocation, MapsError> {
        let url = format!(
            "{}/maps/api/place/details/json",
            self.config.places_base_url.trim_end_matches('/')
        );

        let response = self
            .client
            .get(&url)
            .query(&[("cid", cid), ("key", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MapsError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| MapsError::ParseError(e.to_string()))?;
        let details: PlaceDetailsResponse =
            serde_json::from_str(&body).map_err(|e| MapsError::ParseError(e.to_string()))?;

        details.location().ok_or_else(|| {
            let reason = details
                .error_message
                .or(details.status)
                .unwrap_or_else(|| "no result".to_string());
            warn!(%cid, %reason, "Place lookup returned no location");
            MapsError::PlaceNotFound(cid.to_string())
        })
    }
}

#[async_trait]
impl MapLinkResolver for GoogleMapsResolver {
    #[instrument(skip(self))]
    async fn resolve(&self, link: &str) -> Result<GeoLocation, MapsError> {
        let target = self.expand(link).await?;
        debug!(%target, "Short link expanded");

        let cid = self
            .extract_cid(&target)
            .ok_or_else(|| MapsError::NoPlaceId(target.clone()))?;

        let location = self.place_location(cid).await?;
        debug!(%cid, %location, "Place resolved");
        Ok(location)
    }
}
