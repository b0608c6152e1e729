//! Shared map-link resolution port

use async_trait::async_trait;
use domain::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for turning a shared map link into coordinates
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlaceResolverPort: Send + Sync {
    /// Resolve a map short link to the location it points at
    async fn resolve_map_link(&self, link: &str) -> Result<GeoLocation, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn PlaceResolverPort>();
    }
}
