//! Place resolver adapter - Implements PlaceResolverPort using integration_maps

use application::error::ApplicationError;
use application::ports::PlaceResolverPort;
use async_trait::async_trait;
use domain::GeoLocation;
use integration_maps::{GoogleMapsResolver, MapLinkResolver, MapsError};
use tracing::{instrument, warn};

/// Adapter resolving shared Google Maps links
pub struct MapsAdapter {
    resolver: GoogleMapsResolver,
}

impl std::fmt::Debug for MapsAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapsAdapter")
            .field("resolver", &"GoogleMapsResolver")
            .finish()
    }
}

impl MapsAdapter {
    /// Create a new maps adapter
    pub const fn new(resolver: GoogleMapsResolver) -> Self {
        Self { resolver }
    }
}

fn map_maps_error(e: MapsError) -> ApplicationError {
    ApplicationError::ExternalService(format!("Map link resolution failed: {e}"))
}

#[async_trait]
impl PlaceResolverPort for MapsAdapter {
    #[instrument(skip(self))]
    async fn resolve_map_link(&self, link: &str) -> Result<GeoLocation, ApplicationError> {
        self.resolver.resolve(link).await.map_err(|e| {
            warn!(error = %e, "Map link resolution failed");
            map_maps_error(e)
        })
    }
}
