//! The `{meta, data}` envelope wrapping every AfterShip response, and the
//! rate-limit side channel carried in response headers.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::transport::Headers;

/// `meta.code` value of a successful response.
pub const META_SUCCESS_CODE: i64 = 200;

pub const RATE_LIMIT_RESET_HEADER: &str = "x-ratelimit-reset";
pub const RATE_LIMIT_LIMIT_HEADER: &str = "x-ratelimit-limit";
pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// Response status block present on every response, success or failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub code: i64,
    /// Error category, e.g. `BadRequest`. Absent on success.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Meta {
    pub fn is_success(&self) -> bool {
        self.code == META_SUCCESS_CODE
    }
}

/// Raw response body: `{"meta": {...}, "data": {...}}`.
///
/// Error responses usually carry an empty `data` object, so `data` is kept
/// untyped until the meta block has been checked.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T = serde_json::Value> {
    pub meta: Meta,
    #[serde(default)]
    pub data: Option<T>,
}

/// API quota information from the `x-ratelimit-*` response headers.
///
/// Every field is optional because proxies and mocks may strip the headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimit {
    /// Unix timestamp at which the quota resets.
    pub reset: Option<i64>,
    /// Requests allowed per window.
    pub limit: Option<u32>,
    /// Requests left in the current window.
    pub remaining: Option<u32>,
}

impl RateLimit {
    /// Read the rate-limit headers. Header names are expected in lowercase.
    pub fn from_headers(headers: &Headers) -> Self {
        fn header<T: std::str::FromStr>(headers: &Headers, name: &str) -> Option<T> {
            headers.get(name).and_then(|v| v.trim().parse().ok())
        }

        Self {
            reset: header(headers, RATE_LIMIT_RESET_HEADER),
            limit: header(headers, RATE_LIMIT_LIMIT_HEADER),
            remaining: header(headers, RATE_LIMIT_REMAINING_HEADER),
        }
    }

    /// The reset timestamp as a date, if present and in range.
    pub fn reset_at(&self) -> Option<OffsetDateTime> {
        self.reset
            .and_then(|ts| OffsetDateTime::from_unix_timestamp(ts).ok())
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }
}

/// A successful, fully decoded response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub meta: Meta,
    pub data: T,
    pub rate_limit: RateLimit,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> Headers {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_rate_limit_from_headers() {
        let rate_limit = RateLimit::from_headers(&headers(&[
            ("x-ratelimit-reset", "1406096275"),
            ("x-ratelimit-limit", "10"),
            ("x-ratelimit-remaining", "9"),
        ]));
        assert_eq!(rate_limit.reset, Some(1_406_096_275));
        assert_eq!(rate_limit.limit, Some(10));
        assert_eq!(rate_limit.remaining, Some(9));
        assert!(!rate_limit.is_exhausted());
        assert_eq!(
            rate_limit.reset_at().map(|t| t.year()),
            Some(2014)
        );
    }

    #[test]
    fn test_rate_limit_missing_or_garbage() {
        let rate_limit = RateLimit::from_headers(&headers(&[
            ("x-ratelimit-limit", "ten"),
            ("x-ratelimit-remaining", "0"),
        ]));
        assert_eq!(rate_limit.reset, None);
        assert_eq!(rate_limit.limit, None);
        assert!(rate_limit.is_exhausted());
        assert_eq!(RateLimit::from_headers(&Headers::new()), RateLimit::default());
    }

    #[test]
    fn test_error_envelope_parsing() {
        let json = r#"{
            "meta": {"code": 4004, "type": "BadRequest", "message": "Tracking does not exist."},
            "data": {}
        }"#;
        let envelope: ApiEnvelope = serde_json::from_str(json).unwrap();
        assert!(!envelope.meta.is_success());
        assert_eq!(envelope.meta.error_type.as_deref(), Some("BadRequest"));
        assert_eq!(envelope.meta.message.as_deref(), Some("Tracking does not exist."));
    }

    #[test]
    fn test_success_meta_without_type() {
        let envelope: ApiEnvelope = serde_json::from_str(r#"{"meta": {"code": 200}}"#).unwrap();
        assert!(envelope.meta.is_success());
        assert!(envelope.meta.error_type.is_none());
        assert!(envelope.data.is_none());
    }
}
