//! Default [`Transport`] backed by `reqwest`.
//!
//! Every request carries the API key in the `aftership-api-key` header, the
//! SDK agent string, and a fresh `request-id` for support correlation.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use url::Url;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::{ConfigError, TransportError};
use crate::transport::{Headers, Transport, TransportResponse};

/// Header carrying the account API key.
pub const API_KEY_HEADER: &str = "aftership-api-key";

/// Header identifying the SDK and its version.
pub const AGENT_HEADER: &str = "aftership-agent";

/// Header carrying a per-request UUID.
pub const REQUEST_ID_HEADER: &str = "request-id";

/// HTTP transport talking to the real AfterShip API.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
    endpoint: Url,
    api_key: HeaderValue,
    agent: HeaderValue,
}

impl ReqwestTransport {
    /// Build a transport with its own connection pool, using the timeout
    /// from `config`.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ConfigError::HttpClient)?;

        let mut api_key = HeaderValue::from_str(config.api_key())?;
        api_key.set_sensitive(true);

        Ok(Self {
            http,
            endpoint: with_trailing_slash(config.endpoint()),
            api_key,
            agent: HeaderValue::from_str(&config.user_agent())?,
        })
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure a proxy). The custom client's own timeout applies.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// Resolve `path` below the endpoint, keeping the endpoint's own path
    /// prefix (`/v4`).
    fn url_for(&self, path: &str) -> Result<Url, url::ParseError> {
        self.endpoint.join(path.trim_start_matches('/'))
    }
}

fn with_trailing_slash(endpoint: &Url) -> Url {
    let mut endpoint = endpoint.clone();
    if !endpoint.path().ends_with('/') {
        let path = format!("{}/", endpoint.path());
        endpoint.set_path(&path);
    }
    endpoint
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<TransportResponse, TransportError> {
        let url = self.url_for(path)?;
        let request_id = Uuid::new_v4();
        tracing::debug!(%url, %request_id, "sending GET request");

        let mut request = self
            .http
            .get(url)
            .header(API_KEY_HEADER, self.api_key.clone())
            .header(AGENT_HEADER, self.agent.clone())
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .header(CONTENT_TYPE, "application/json");
        if !query.is_empty() {
            request = request.query(query);
        }

        let resp = request.send().await?;
        let status = resp.status().as_u16();
        let headers: Headers = resp
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                let value = value.to_str().ok()?;
                Some((name.as_str().to_owned(), value.to_owned()))
            })
            .collect();
        let body = resp.bytes().await?;
        tracing::debug!(status, %request_id, bytes = body.len(), "received response");

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(endpoint: &str) -> ReqwestTransport {
        let config = ClientConfig::new("SOME_API_KEY")
            .unwrap()
            .with_endpoint(endpoint)
            .unwrap();
        ReqwestTransport::new(&config).unwrap()
    }

    #[test]
    fn test_url_keeps_version_prefix() {
        let t = transport("https://api.aftership.com/v4");
        assert_eq!(
            t.url_for("/last_checkpoint/ups/1234567890").unwrap().as_str(),
            "https://api.aftership.com/v4/last_checkpoint/ups/1234567890"
        );

        let t = transport("https://api.aftership.com/v4/");
        assert_eq!(
            t.url_for("/last_checkpoint/abc").unwrap().as_str(),
            "https://api.aftership.com/v4/last_checkpoint/abc"
        );
    }

    #[test]
    fn test_url_on_bare_host() {
        let t = transport("http://127.0.0.1:9000");
        assert_eq!(
            t.url_for("/last_checkpoint/dhl/AB%2F12").unwrap().as_str(),
            "http://127.0.0.1:9000/last_checkpoint/dhl/AB%2F12"
        );
    }

    #[test]
    fn test_api_key_is_sensitive() {
        let t = transport("https://api.aftership.com/v4");
        assert!(t.api_key.is_sensitive());
        assert!(!format!("{t:?}").contains("SOME_API_KEY"));
    }
}
