//! Configuration: endpoint location, credentials, and logging.

mod auth;
mod credentials;
mod loader;
mod types;

pub use auth::{build_auth_header, AuthHeader};
pub use credentials::{AuthType, CredentialStatus, SecureString};
pub use loader::ConfigError;
pub use types::{ApiConfig, AuthConfig, Config, LoggingConfig};
