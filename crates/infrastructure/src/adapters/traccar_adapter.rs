//! Position adapter - Implements PositionPort using integration_traccar

use application::error::ApplicationError;
use application::ports::PositionPort;
use async_trait::async_trait;
use domain::GeoLocation;
use integration_traccar::{HttpTraccarClient, TraccarClient, TraccarError};
use tracing::{instrument, warn};

/// Adapter reading the tracked device position from Traccar
pub struct TraccarPositionAdapter {
    client: HttpTraccarClient,
}

impl std::fmt::Debug for TraccarPositionAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraccarPositionAdapter")
            .field("client", &"HttpTraccarClient")
            .finish()
    }
}

impl TraccarPositionAdapter {
    /// Create a new position adapter
    pub const fn new(client: HttpTraccarClient) -> Self {
        Self { client }
    }
}

fn map_traccar_error(e: TraccarError) -> ApplicationError {
    ApplicationError::ExternalService(format!("Position lookup failed: {e}"))
}

#[async_trait]
impl PositionPort for TraccarPositionAdapter {
    #[instrument(skip(self))]
    async fn current_position(&self) -> Result<GeoLocation, ApplicationError> {
        self.client.current_position().await.map_err(|e| {
            warn!(error = %e, "Position lookup failed");
            map_traccar_error(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_device_is_external_failure() {
        let err = map_traccar_error(TraccarError::NotFound {
            entity: "device",
            id: 3,
        });
        assert!(matches!(err, ApplicationError::ExternalService(msg) if msg.contains("device")));
    }
}
