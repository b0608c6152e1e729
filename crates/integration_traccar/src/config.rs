//! Traccar connection configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Traccar server
#[derive(Clone, Serialize, Deserialize)]
pub struct TraccarConfig {
    /// Server base URL (e.g., `https://traccar.example.com`)
    pub base_url: String,

    /// Login user
    pub username: String,

    /// Login password
    #[serde(skip_serializing)]
    pub password: String,

    /// Identifier of the tracked device
    pub device_id: i64,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_timeout_secs() -> u64 {
    10
}

impl std::fmt::Debug for TraccarConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraccarConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("device_id", &self.device_id)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl TraccarConfig {
    /// Base URL without a trailing slash
    pub(crate) fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
