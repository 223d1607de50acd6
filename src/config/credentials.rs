//! Credential resolution from configuration.
//!
//! This module provides secure handling of secrets resolved from the
//! config or the environment at runtime.

use super::types::AuthConfig;

/// Authentication type for API requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthType {
    /// `Authorization: Basic` with user name and application password.
    Basic,
    /// Standard `Authorization: Bearer` header.
    Bearer,
    /// No authentication required.
    None,
}

impl AuthType {
    /// Parse auth type from string.
    /// Defaults to `None` for unknown values.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "basic" => AuthType::Basic,
            "bearer" => AuthType::Bearer,
            _ => AuthType::None,
        }
    }
}

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of credential resolution.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// Secret resolved successfully.
    Configured(SecureString),
    /// Secret is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
    /// No authentication required.
    NoAuth,
}

impl AuthConfig {
    pub fn auth_type(&self) -> AuthType {
        AuthType::parse(&self.auth_type_str)
    }

    /// Resolve the secret from config, falling back to `secret_env_var`.
    ///
    /// Not cached, so a changed environment takes effect on the next request.
    pub fn resolve_credential(&self) -> CredentialStatus {
        if self.auth_type() == AuthType::None {
            return CredentialStatus::NoAuth;
        }

        if let Some(secret) = self.secret.as_ref().filter(|s| !s.is_empty()) {
            return CredentialStatus::Configured(SecureString::new(secret.clone()));
        }

        match &self.secret_env_var {
            Some(var) => match std::env::var(var) {
                Ok(value) if !value.is_empty() => {
                    CredentialStatus::Configured(SecureString::new(value))
                }
                _ => CredentialStatus::Unconfigured {
                    reason: format!("Environment variable {} is not set", var),
                },
            },
            None => CredentialStatus::Unconfigured {
                reason: "auth.secret is not set".to_string(),
            },
        }
    }

    /// Whether requests can be authenticated (or need no auth).
    pub fn is_configured(&self) -> bool {
        match self.resolve_credential() {
            CredentialStatus::NoAuth => true,
            CredentialStatus::Configured(_) => {
                self.auth_type() != AuthType::Basic || self.username.is_some()
            }
            CredentialStatus::Unconfigured { .. } => false,
        }
    }
}
