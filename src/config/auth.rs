//! Authentication header building for API requests.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::credentials::{AuthType, CredentialStatus};
use super::types::AuthConfig;

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

/// Build the authentication header for the configured credentials.
///
/// Returns `Some((header_name, header_value))` if auth is configured,
/// or `None` if no auth is needed or credentials are missing.
pub fn build_auth_header(auth: &AuthConfig) -> Option<AuthHeader> {
    match (auth.auth_type(), auth.resolve_credential()) {
        (AuthType::Basic, CredentialStatus::Configured(secret)) => {
            let username = auth.username.as_deref()?;
            let encoded = STANDARD.encode(format!("{}:{}", username, secret.expose()));
            Some(("Authorization".to_string(), format!("Basic {}", encoded)))
        }
        (AuthType::Bearer, CredentialStatus::Configured(secret)) => Some((
            "Authorization".to_string(),
            format!("Bearer {}", secret.expose()),
        )),
        (AuthType::None, _) => None,
        (_, CredentialStatus::Unconfigured { .. }) => None,
        (_, CredentialStatus::NoAuth) => None,
    }
}
