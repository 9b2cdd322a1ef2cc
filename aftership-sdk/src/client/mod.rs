//! Resource handlers and the [`AfterShip`] entry point.
//!
//! The reqwest-backed transport is gated behind the `client` cargo feature
//! (on by default) so embedders bringing their own [`Transport`] do not pull
//! in `reqwest`.

mod last_checkpoint;
#[cfg(feature = "client")]
mod reqwest_transport;

pub use last_checkpoint::{LAST_CHECKPOINT_PATH, LastCheckpointHandler};
#[cfg(feature = "client")]
pub use reqwest_transport::{AGENT_HEADER, API_KEY_HEADER, REQUEST_ID_HEADER, ReqwestTransport};

use std::sync::Arc;

use serde::de::DeserializeOwned;

#[cfg(feature = "client")]
use crate::config::ClientConfig;
use crate::error::{ApiError, ClientError};
use crate::objects::envelope::{ApiEnvelope, ApiResponse, META_SUCCESS_CODE, RateLimit};
use crate::transport::{Transport, TransportResponse};

/// Typed client for the AfterShip API.
///
/// ```ignore
/// use aftership_sdk::{AfterShip, LookupParams};
///
/// let aftership = AfterShip::new("SOME_API_KEY")?;
/// let summary = aftership
///     .last_checkpoint
///     .get_last_checkpoint(&LookupParams::by_slug_and_number("ups", "1234567890"))
///     .await?;
/// println!("{:?}", summary.checkpoint.message);
/// ```
pub struct AfterShip<T> {
    pub last_checkpoint: LastCheckpointHandler<T>,
}

impl<T> Clone for AfterShip<T> {
    fn clone(&self) -> Self {
        Self {
            last_checkpoint: self.last_checkpoint.clone(),
        }
    }
}

impl<T> std::fmt::Debug for AfterShip<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AfterShip")
            .field("last_checkpoint", &self.last_checkpoint)
            .finish()
    }
}

impl<T: Transport> AfterShip<T> {
    /// Build a client on top of any transport, e.g. a test double.
    pub fn with_transport(transport: T) -> Self {
        let transport = Arc::new(transport);
        Self {
            last_checkpoint: LastCheckpointHandler::new(transport),
        }
    }
}

#[cfg(feature = "client")]
impl AfterShip<ReqwestTransport> {
    /// Create a client for the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ClientError> {
        Self::from_config(&ClientConfig::new(api_key)?)
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::with_transport(ReqwestTransport::new(config)?))
    }
}

/// Classify a raw response.
///
/// Success requires both a 2xx status and `meta.code == 200`; anything else
/// becomes an [`ApiError`]. A non-2xx response without a readable envelope
/// still yields an `ApiError`, never a JSON error.
fn parse_response<T: DeserializeOwned>(
    resp: TransportResponse,
) -> Result<ApiResponse<T>, ClientError> {
    let rate_limit = RateLimit::from_headers(&resp.headers);
    let envelope: ApiEnvelope = match serde_json::from_slice(&resp.body) {
        Ok(envelope) => envelope,
        Err(e) if resp.is_success() => return Err(ClientError::Json(e)),
        Err(_) => return Err(ApiError::generic(resp.status, rate_limit).into()),
    };

    if !resp.is_success() || !envelope.meta.is_success() {
        let mut err = ApiError::from_meta(envelope.meta, resp.status, rate_limit);
        // meta claims success but the status does not
        if !resp.is_success() && err.code == META_SUCCESS_CODE {
            err.code = i64::from(resp.status);
        }
        return Err(err.into());
    }

    let data = serde_json::from_value(envelope.data.unwrap_or_default())?;
    Ok(ApiResponse {
        meta: envelope.meta,
        data,
        rate_limit,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::GENERIC_ERROR_TYPE;
    use crate::transport::Headers;

    fn response(status: u16, body: &str) -> TransportResponse {
        TransportResponse::new(status, Headers::new(), body.to_owned())
    }

    #[derive(Debug, serde::Deserialize)]
    struct Sample {
        id: String,
    }

    #[test]
    fn test_success() {
        let body = json!({"meta": {"code": 200}, "data": {"id": "abc"}}).to_string();
        let resp: ApiResponse<Sample> = parse_response(response(200, &body)).unwrap();
        assert_eq!(resp.data.id, "abc");
        assert_eq!(resp.rate_limit, RateLimit::default());
    }

    #[test]
    fn test_http_ok_but_meta_failure() {
        let body = json!({
            "meta": {"code": 4010, "type": "Unauthorized", "message": "Invalid API key."},
            "data": {}
        })
        .to_string();
        let err = parse_response::<Sample>(response(200, &body)).unwrap_err();
        let api = err.as_api().unwrap();
        assert_eq!(api.error_type, "Unauthorized");
        assert_eq!(api.code, 4010);
        assert_eq!(api.status, 200);
    }

    #[test]
    fn test_http_failure_but_meta_ok() {
        let body = json!({"meta": {"code": 200}, "data": {"id": "abc"}}).to_string();
        let err = parse_response::<Sample>(response(503, &body)).unwrap_err();
        let api = err.as_api().unwrap();
        assert_eq!(api.error_type, GENERIC_ERROR_TYPE);
        assert_eq!(api.code, 503);
    }

    #[test]
    fn test_unreadable_error_body() {
        let err = parse_response::<Sample>(response(502, "<html>Bad Gateway</html>")).unwrap_err();
        let api = err.as_api().unwrap();
        assert_eq!(api.error_type, GENERIC_ERROR_TYPE);
        assert_eq!(api.status, 502);
    }

    #[test]
    fn test_unreadable_success_body() {
        let err = parse_response::<Sample>(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ClientError::Json(_)));

        let body = json!({"meta": {"code": 200}, "data": {"unexpected": true}}).to_string();
        let err = parse_response::<Sample>(response(200, &body)).unwrap_err();
        assert!(matches!(err, ClientError::Json(_)));
    }
}
