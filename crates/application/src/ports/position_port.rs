//! Device position port

use async_trait::async_trait;
use domain::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for locating the tracked device
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PositionPort: Send + Sync {
    /// Last known location of the device
    async fn current_position(&self) -> Result<GeoLocation, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn PositionPort>();
    }
}
