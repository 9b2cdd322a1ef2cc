//! Configuration module for the CLI.
//!
//! Merges an optional TOML file with values coming from command line
//! arguments or environment variables (clap resolves those two before we get
//! here). Precedence: command line / env > file > SDK defaults.

pub mod file;

use std::path::{Path, PathBuf};
use std::time::Duration;

use aftership_sdk::ClientConfig;
use thiserror::Error;

use crate::config::file::FileConfig;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("no api key given (use --api-key, AFTERSHIP_API_KEY or the config file)")]
    MissingApiKey,

    #[error("timeout must be at least one second")]
    ZeroTimeout,

    #[error("invalid client configuration: {0}")]
    Client(#[from] aftership_sdk::ConfigError),
}

/// Values given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    overrides: Overrides,
}

impl ConfigLoader {
    pub fn new(config_path: Option<impl AsRef<Path>>, overrides: Overrides) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            overrides,
        }
    }

    /// Load the file (if any), apply overrides and build the SDK config.
    pub fn load(&self) -> Result<ClientConfig, ConfigError> {
        let file_config = match &self.config_path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                toml::from_str(&content)?
            }
            None => FileConfig::default(),
        };
        self.build(file_config)
    }

    fn build(&self, file_config: FileConfig) -> Result<ClientConfig, ConfigError> {
        let section = file_config.client;
        let overrides = self.overrides.clone();

        let api_key = overrides
            .api_key
            .or(section.api_key)
            .ok_or(ConfigError::MissingApiKey)?;
        let mut config = ClientConfig::new(api_key)?;

        if let Some(endpoint) = overrides.endpoint.or(section.endpoint) {
            config = config.with_endpoint(&endpoint)?;
        }
        if let Some(secs) = overrides.timeout_secs.or(section.timeout_secs) {
            if secs == 0 {
                return Err(ConfigError::ZeroTimeout);
            }
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(prefix) = section.user_agent_prefix {
            config = config.with_user_agent_prefix(prefix);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const FILE: &str = r#"
[client]
api_key = "file-key"
endpoint = "https://file.example.com/v4"
timeout_secs = 10
"#;

    #[test]
    fn test_file_only() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FILE.as_bytes()).unwrap();

        let config = ConfigLoader::new(Some(file.path()), Overrides::default())
            .load()
            .unwrap();
        assert_eq!(config.api_key(), "file-key");
        assert_eq!(config.endpoint().host_str(), Some("file.example.com"));
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_overrides_win() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FILE.as_bytes()).unwrap();

        let overrides = Overrides {
            api_key: Some("cli-key".into()),
            endpoint: Some("http://127.0.0.1:9000".into()),
            timeout_secs: None,
        };
        let config = ConfigLoader::new(Some(file.path()), overrides).load().unwrap();
        assert_eq!(config.api_key(), "cli-key");
        assert_eq!(config.endpoint().port(), Some(9000));
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_no_file_uses_sdk_defaults() {
        let overrides = Overrides {
            api_key: Some("cli-key".into()),
            ..Overrides::default()
        };
        let config = ConfigLoader::new(None::<PathBuf>, overrides).load().unwrap();
        assert_eq!(config.endpoint().as_str(), aftership_sdk::config::DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_missing_api_key() {
        let err = ConfigLoader::new(None::<PathBuf>, Overrides::default())
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn test_zero_timeout_in_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[client]\napi_key = \"file-key\"\ntimeout_secs = 0\n")
            .unwrap();

        let err = ConfigLoader::new(Some(file.path()), Overrides::default())
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::ZeroTimeout));
    }

    #[test]
    fn test_missing_file() {
        let err = ConfigLoader::new(Some("/nonexistent/aftership.toml"), Overrides::default())
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
