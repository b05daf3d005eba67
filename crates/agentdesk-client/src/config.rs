//! Client configuration.
//!
//! Configuration priority: explicit construction > environment variables.

use agentdesk_core::error::{AgentdeskError, Result};
use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the console backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the backend, e.g. `https://console.example.com`.
    pub base_url: String,
    /// Optional bearer token sent with every request.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ClientConfig {
    /// Creates a config with the given base URL and default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Adds a bearer token that will be sent alongside every request.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Loads configuration from environment variables.
    ///
    /// Reads `AGENTDESK_BASE_URL` (required), `AGENTDESK_API_KEY` and
    /// `AGENTDESK_TIMEOUT_SECS` (optional).
    ///
    /// # Errors
    ///
    /// Returns a config error if the base URL is missing or the timeout is
    /// not a number.
    pub fn try_from_env() -> Result<Self> {
        let base_url = env::var("AGENTDESK_BASE_URL").map_err(|_| {
            AgentdeskError::config("AGENTDESK_BASE_URL not found in environment variables")
        })?;

        let mut config = Self::new(base_url);

        if let Ok(api_key) = env::var("AGENTDESK_API_KEY") {
            config.api_key = Some(api_key);
        }
        if let Ok(timeout) = env::var("AGENTDESK_TIMEOUT_SECS") {
            config.timeout_secs = timeout.parse().map_err(|_| {
                AgentdeskError::config(format!("Invalid AGENTDESK_TIMEOUT_SECS: '{}'", timeout))
            })?;
        }

        Ok(config)
    }
}
