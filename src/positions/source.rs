use async_trait::async_trait;

use crate::error::FetchError;

use super::model::{Device, PositionRecord};
use super::query::PositionQuery;

#[async_trait]
pub trait PositionSource: Send + Sync {
    /// Fetches the positions a device reported inside the query window,
    /// ordered as the server returns them.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failures, non-success statuses, or an
    /// undecodable body.
    async fn fetch_positions(&self, query: &PositionQuery)
    -> Result<Vec<PositionRecord>, FetchError>;

    /// Fetches the devices visible to the current credentials.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failures, non-success statuses, or an
    /// undecodable body.
    async fn fetch_devices(&self) -> Result<Vec<Device>, FetchError>;
}
