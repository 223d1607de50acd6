use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Location of the reviews endpoint and HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Site root (e.g., "https://example.com").
    #[serde(default)]
    pub site_url: String,
    /// REST API prefix under the site root (default: "wp-json").
    #[serde(default = "default_api_root")]
    pub api_root: String,
    /// Resource path under the API root (default: "/wp/v2/reviews").
    #[serde(default = "default_resource_path")]
    pub resource_path: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Credentials sent with every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Authentication type: "none", "basic", "bearer".
    #[serde(rename = "auth_type", default = "default_auth_type")]
    pub auth_type_str: String,
    /// User name for basic auth.
    #[serde(default)]
    pub username: Option<String>,
    /// Password (or application password) for basic auth, or bearer token.
    #[serde(default)]
    pub secret: Option<String>,
    /// Environment variable to read the secret from when `secret` is unset.
    #[serde(default)]
    pub secret_env_var: Option<String>,
}

/// Log output settings. `RUST_LOG` and `REVIEWKIT_LOG` override these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Write logs to this file instead of stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_api_root() -> String {
    "wp-json".to_string()
}

fn default_resource_path() -> String {
    "/wp/v2/reviews".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_auth_type() -> String {
    "none".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            site_url: String::new(),
            api_root: default_api_root(),
            resource_path: default_resource_path(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl ApiConfig {
    /// Config pointing at `site_url` with every other field defaulted.
    pub fn for_site(site_url: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
            ..Self::default()
        }
    }

    /// Full resource URL: `{site_url}/{api_root}{resource_path}`.
    pub fn resource_url(&self) -> String {
        let site = self.site_url.trim_end_matches('/');
        let root = self.api_root.trim_matches('/');
        let path = self.resource_path.trim_start_matches('/');
        if root.is_empty() {
            format!("{}/{}", site, path)
        } else {
            format!("{}/{}/{}", site, root, path)
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            auth_type_str: default_auth_type(),
            username: None,
            secret: None,
            secret_env_var: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
