//! Last checkpoint resource: the most recent tracking event of a shipment.

use std::fmt;
use std::sync::Arc;

use super::parse_response;
use crate::error::ClientError;
use crate::objects::checkpoint::TrackingSummary;
use crate::objects::envelope::ApiResponse;
use crate::objects::lookup::{LastCheckpointQuery, LookupParams, TrackingLocator};
use crate::transport::Transport;

/// Path segment of the resource.
pub const LAST_CHECKPOINT_PATH: &str = "last_checkpoint";

/// Handler for `GET /last_checkpoint/...`.
///
/// Holds nothing but a shared transport, so concurrent calls never
/// influence each other.
pub struct LastCheckpointHandler<T> {
    transport: Arc<T>,
}

impl<T> Clone for LastCheckpointHandler<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T> fmt::Debug for LastCheckpointHandler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LastCheckpointHandler").finish_non_exhaustive()
    }
}

impl<T: Transport> LastCheckpointHandler<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Fetch the last checkpoint of a tracking.
    ///
    /// `params` must address the tracking either by `slug` +
    /// `tracking_number` or by `tracking_id`; anything else fails with
    /// [`ClientError::Handler`] before a request is sent.
    ///
    /// * `GET /last_checkpoint/{slug}/{tracking_number}`
    /// * `GET /last_checkpoint/{tracking_id}`
    pub async fn get_last_checkpoint(
        &self,
        params: &LookupParams,
    ) -> Result<TrackingSummary, ClientError> {
        let locator = TrackingLocator::try_from(params)?;
        let resp = self
            .fetch_last_checkpoint(&locator, &LastCheckpointQuery::default())
            .await?;
        Ok(resp.data)
    }

    /// Like [`get_last_checkpoint`](Self::get_last_checkpoint), for an
    /// already validated locator, with optional `fields`/`lang` query
    /// parameters. Returns the meta block and rate limit alongside the data.
    pub async fn fetch_last_checkpoint(
        &self,
        locator: &TrackingLocator,
        query: &LastCheckpointQuery,
    ) -> Result<ApiResponse<TrackingSummary>, ClientError> {
        locator.check_segments()?;
        let path = locator.path(LAST_CHECKPOINT_PATH);
        let resp = self.transport.get(&path, &query.to_pairs()).await?;
        parse_response(resp)
    }
}
