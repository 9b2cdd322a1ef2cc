//! Client configuration.

use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Production API root.
pub const DEFAULT_ENDPOINT: &str = "https://api.aftership.com/v4";

/// Prefix of the `aftership-agent` header value.
pub const DEFAULT_USER_AGENT_PREFIX: &str = "aftership-sdk-rust";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Validated settings for talking to the AfterShip API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_key: String,
    endpoint: Url,
    user_agent_prefix: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Create a config for the production endpoint.
    ///
    /// Fails if `api_key` is blank.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self {
            api_key,
            endpoint: default_endpoint(),
            user_agent_prefix: DEFAULT_USER_AGENT_PREFIX.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Point the client at another API root (sandbox, proxy, mock server).
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(endpoint)?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(endpoint.scheme().to_owned()));
        }
        self.endpoint = endpoint;
        Ok(self)
    }

    pub fn with_user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = prefix.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Value of the `aftership-agent` header, e.g. `aftership-sdk-rust-0.1.0`.
    pub fn user_agent(&self) -> String {
        format!("{}-{}", self.user_agent_prefix, env!("CARGO_PKG_VERSION"))
    }
}

fn default_endpoint() -> Url {
    Url::parse(DEFAULT_ENDPOINT).expect("valid default endpoint")
}
