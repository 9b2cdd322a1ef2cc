//! TOML file configuration structures.
//!
//! These structs directly map to the `aftership.toml` file format. Every
//! field is optional so the file can carry only what the environment or the
//! command line does not.

use serde::{Deserialize, Serialize};

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub client: ClientSection,
}

/// `[client]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientSection {
    /// AfterShip API key.
    pub api_key: Option<String>,
    /// API root, e.g. `https://api.aftership.com/v4`.
    pub endpoint: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Prefix of the `aftership-agent` header.
    pub user_agent_prefix: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parsing() {
        let toml_str = r#"
[client]
api_key = "SOME_API_KEY"
endpoint = "https://sandbox.example.com/v4"
timeout_secs = 10
user_agent_prefix = "warehouse-bot"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.client.api_key.as_deref(), Some("SOME_API_KEY"));
        assert_eq!(
            config.client.endpoint.as_deref(),
            Some("https://sandbox.example.com/v4")
        );
        assert_eq!(config.client.timeout_secs, Some(10));
        assert_eq!(config.client.user_agent_prefix.as_deref(), Some("warehouse-bot"));
    }

    #[test]
    fn test_empty_config_parsing() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.client.api_key.is_none());
        assert!(config.client.timeout_secs.is_none());
    }
}
