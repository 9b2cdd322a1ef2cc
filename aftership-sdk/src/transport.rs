//! The HTTP transport seam.
//!
//! Resource handlers only know how to build a path and classify a response;
//! actually talking to the network is delegated to a [`Transport`]. The
//! default implementation is `ReqwestTransport` (feature `client`); tests
//! and embedders can plug in their own.

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::TransportError;

/// Response headers with lowercase names.
pub type Headers = HashMap<String, String>;

/// A raw HTTP response as seen by the handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: Headers,
    pub body: Bytes,
}

impl TransportResponse {
    pub fn new(status: u16, headers: Headers, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues requests against the configured AfterShip endpoint.
///
/// Base URL, authentication and timeouts are the transport's concern.
/// Implementations must be safe to share between concurrent calls.
#[async_trait]
pub trait Transport: Send + Sync {
    /// `GET {endpoint}{path}?{query}`.
    ///
    /// `path` starts with `/` and is already percent-encoded.
    async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<TransportResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<TransportResponse, TransportError> {
        (**self).get(path, query).await
    }
}
