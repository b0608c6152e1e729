//! Traccar REST client

use std::time::Duration;

use async_trait::async_trait;
use domain::GeoLocation;
use reqwest::{Client, StatusCode, header::ACCEPT};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::TraccarConfig;
use crate::error::TraccarError;
use crate::models::{Device, Position};

/// Trait for Traccar clients
#[async_trait]
pub trait TraccarClient: Send + Sync {
    /// Fetch a device record by id
    async fn device(&self, device_id: i64) -> Result<Device, TraccarError>;

    /// Fetch a position record by id
    async fn position(&self, position_id: i64) -> Result<Position, TraccarError>;

    /// Last reported location of the configured device
    async fn current_position(&self) -> Result<GeoLocation, TraccarError>;
}

/// Traccar client using the HTTP API with basic auth
#[derive(Debug)]
pub struct HttpTraccarClient {
    client: Client,
    config: TraccarConfig,
}

impl HttpTraccarClient {
    /// Create a new Traccar client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: TraccarConfig) -> Result<Self, TraccarError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("TrainInfo/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TraccarError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// GET a Traccar list endpoint filtered by `id` and return its first entry
    ///
    /// Traccar answers id lookups with a JSON array; an empty array means the
    /// record does not exist or is not visible to the user.
    async fn first_by_id<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        entity: &'static str,
        id: i64,
    ) -> Result<T, TraccarError> {
        let url = format!("{}/api/{endpoint}", self.config.base());

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .basic_auth(&self.config.username, Some(&self.config.password))
            .query(&[("id", id)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TraccarError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    TraccarError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(TraccarError::AuthenticationFailed);
        }
        if !status.is_success() {
            return Err(TraccarError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TraccarError::ParseError(e.to_string()))?;

        Self::parse_first(&body)?.ok_or(TraccarError::NotFound { entity, id })
    }

    fn parse_first<T: DeserializeOwned>(body: &str) -> Result<Option<T>, TraccarError> {
        let items: Vec<T> =
            serde_json::from_str(body).map_err(|e| TraccarError::ParseError(e.to_string()))?;
        Ok(items.into_iter().next())
    }
}

#[async_trait]
impl TraccarClient for HttpTraccarClient {
    #[instrument(skip(self))]
    async fn device(&self, device_id: i64) -> Result<Device, TraccarError> {
        self.first_by_id("devices", "device", device_id).await
    }

    #[instrument(skip(self))]
    async fn position(&self, position_id: i64) -> Result<Position, TraccarError> {
        self.first_by_id("positions", "position", position_id).await
    }

    #[instrument(skip(self), fields(device_id = self.config.device_id))]
    async fn current_position(&self) -> Result<GeoLocation, TraccarError> {
        let device = self.device(self.config.device_id).await?;
        let position_id = device
            .latest_position_id()
            .ok_or(TraccarError::NoPosition(device.id))?;

        let position = self.position(position_id).await?;
        let location = GeoLocation::from(&position);

        debug!(%location, position_id, "Current device position");
        Ok(location)
    }
}
