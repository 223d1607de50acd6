use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::credentials::CredentialStatus;
use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/reviewkit/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("reviewkit").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()` unvalidated.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The site URL is set and is an absolute http(s) URL
    /// - Timeouts are non-zero
    /// - Authenticated modes have a resolvable secret (and a user name for basic)
    pub fn validate(&self) -> Result<(), ConfigError> {
        let site = &self.api.site_url;
        if site.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "api.site_url must be set".to_string(),
            });
        }

        let parsed = url::Url::parse(site).map_err(|e| ConfigError::ValidationError {
            message: format!("api.site_url '{}' is not a valid URL: {}", site, e),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!("api.site_url '{}' must use http or https", site),
            });
        }

        if self.api.timeout_seconds == 0 || self.api.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Timeouts must be greater than zero".to_string(),
            });
        }

        if !self.auth.is_configured() {
            let detail = match self.auth.resolve_credential() {
                CredentialStatus::Unconfigured { reason } => reason,
                _ => "auth.username is not set".to_string(),
            };
            return Err(ConfigError::ValidationError {
                message: format!(
                    "auth_type '{}' is not usable: {}",
                    self.auth.auth_type_str, detail
                ),
            });
        }

        Ok(())
    }
}
