//! Errors produced by the SDK.

use crate::objects::envelope::{Meta, RateLimit};

/// Error category used when the server did not send a `meta.type`.
pub const GENERIC_ERROR_TYPE: &str = "InternalError";
const GENERIC_ERROR_MESSAGE: &str = "Something went wrong on AfterShip's end.";

/// Top-level error returned by every SDK call.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request parameters were rejected locally; nothing was sent.
    #[error("HandlerError: {0}")]
    Handler(#[from] HandlerError),

    /// The API answered with a failure envelope or a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request never produced a response (DNS, TLS, timeout, …).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A success envelope whose `data` did not match the expected shape.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The client could not be built from its configuration.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// The API error, if this is one.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// Invalid tracking lookup parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HandlerError {
    #[error("You must specify the tracking number or tracking id")]
    MissingIdentifier,
    #[error("Cannot specify tracking number and tracking id at the same time")]
    ConflictingIdentifiers,
    #[error("Slug, tracking number and tracking id cannot be \".\" or \"..\"")]
    DotSegment,
}

/// Failure reported by the AfterShip API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{error_type}: {message}")]
pub struct ApiError {
    /// `meta.code`, e.g. `4004`. Falls back to the HTTP status when the body
    /// had no envelope.
    pub code: i64,
    /// `meta.type`, e.g. `BadRequest`. Use this to tell failures apart.
    pub error_type: String,
    pub message: String,
    /// HTTP status of the response.
    pub status: u16,
    pub rate_limit: RateLimit,
}

impl ApiError {
    /// Build from a failure envelope. Missing type or message fall back to a
    /// generic internal error.
    pub fn from_meta(meta: Meta, status: u16, rate_limit: RateLimit) -> Self {
        Self {
            code: meta.code,
            error_type: meta
                .error_type
                .unwrap_or_else(|| GENERIC_ERROR_TYPE.to_owned()),
            message: meta
                .message
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_owned()),
            status,
            rate_limit,
        }
    }

    /// Error for a response whose body is not an envelope at all.
    pub fn generic(status: u16, rate_limit: RateLimit) -> Self {
        Self {
            code: i64::from(status),
            error_type: GENERIC_ERROR_TYPE.to_owned(),
            message: GENERIC_ERROR_MESSAGE.to_owned(),
            status,
            rate_limit,
        }
    }

    pub fn is_type(&self, error_type: &str) -> bool {
        self.error_type == error_type
    }
}

/// Network-level failure, passed through from the transport untouched.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[cfg(feature = "client")]
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint could not be joined with the request path.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// Failure raised by a custom [`Transport`](crate::transport::Transport).
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Whether the request timed out before a response arrived.
    pub fn is_timeout(&self) -> bool {
        match self {
            #[cfg(feature = "client")]
            Self::Http(e) => e.is_timeout(),
            _ => false,
        }
    }
}

/// Invalid client configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("api key must not be empty")]
    EmptyApiKey,

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("endpoint must be an http(s) url: {0}")]
    UnsupportedScheme(String),

    #[cfg(feature = "client")]
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[cfg(feature = "client")]
    #[error("failed to build http client: {0}")]
    HttpClient(#[source] reqwest::Error),
}
