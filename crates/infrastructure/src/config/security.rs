//! Security configuration: the shared API token.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Security configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Bearer token every `/journey` request must present
    #[serde(skip_serializing)]
    pub api_token: SecretString,
}

impl SecurityConfig {
    /// Whether a usable token is configured
    #[must_use]
    pub fn has_token(&self) -> bool {
        !self.api_token.expose_secret().trim().is_empty()
    }
}
