//! Configuration types for the Local DNS console
//!
//! The binary fills [`ConsoleConfig`] from environment variables; library users
//! can build it directly.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Dashboard API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.meraki.com/api/v1";

/// Main console configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Bearer token for the Dashboard API
    /// ⚠️ NEVER log this value
    pub api_key: String,

    /// API base URL, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request HTTP timeout (in seconds)
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,

    /// Lifetime of a cached network list (in seconds)
    ///
    /// `None` keeps network lists for the whole process lifetime.
    #[serde(default)]
    pub network_cache_ttl_secs: Option<u64>,
}

impl ConsoleConfig {
    /// Create a configuration with defaults for everything but the API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            http_timeout_secs: default_http_timeout_secs(),
            network_cache_ttl_secs: None,
        }
    }

    /// Override the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the HTTP timeout
    pub fn with_http_timeout_secs(mut self, secs: u64) -> Self {
        self.http_timeout_secs = secs;
        self
    }

    /// Expire cached network lists after `secs`
    pub fn with_network_cache_ttl_secs(mut self, secs: Option<u64>) -> Self {
        self.network_cache_ttl_secs = secs;
        self
    }

    /// HTTP timeout as a [`Duration`]
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Network cache TTL as a [`Duration`]
    pub fn network_cache_ttl(&self) -> Option<Duration> {
        self.network_cache_ttl_secs.map(Duration::from_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.api_key.trim().is_empty() {
            return Err(crate::Error::config("API key cannot be empty"));
        }

        if !self.base_url.starts_with("https://") && !self.base_url.starts_with("http://") {
            return Err(crate::Error::config(format!(
                "Base URL must use HTTP or HTTPS scheme. Got: {}",
                self.base_url
            )));
        }

        if !(1..=300).contains(&self.http_timeout_secs) {
            return Err(crate::Error::config(format!(
                "HTTP timeout must be between 1 and 300 seconds. Got: {}",
                self.http_timeout_secs
            )));
        }

        Ok(())
    }
}

// Keeps the API key out of Debug output
impl std::fmt::Debug for ConsoleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleConfig")
            .field("api_key", &"<REDACTED>")
            .field("base_url", &self.base_url)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("network_cache_ttl_secs", &self.network_cache_ttl_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_http_timeout_secs() -> u64 {
    30
}
