//! Configuration types for the rdns challenge provider

use serde::{Deserialize, Serialize};

/// Default HTTP timeout for API requests (in seconds)
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Provider configuration
///
/// # Security
///
/// The Debug implementation does NOT expose the API token.
#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the DNS-management API (used verbatim)
    pub api_endpoint: String,

    /// Bearer token for the API
    /// ⚠️ NEVER log this value
    pub api_token: String,

    /// Per-request HTTP timeout (in seconds)
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,

    /// Report non-2xx responses to record deletion as errors
    ///
    /// Off by default: orchestrators treat cleanup failures as non-fatal,
    /// and the API's delete status is not checked unless asked for.
    #[serde(default)]
    pub strict_cleanup: bool,
}

impl ProviderConfig {
    /// Create a new configuration with default settings
    pub fn new(api_endpoint: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            api_endpoint: api_endpoint.into(),
            api_token: api_token.into(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            strict_cleanup: false,
        }
    }

    /// Set the per-request HTTP timeout
    pub fn with_http_timeout_secs(mut self, secs: u64) -> Self {
        self.http_timeout_secs = secs;
        self
    }

    /// Enable or disable strict cleanup
    pub fn with_strict_cleanup(mut self, strict: bool) -> Self {
        self.strict_cleanup = strict;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.api_endpoint.is_empty() {
            return Err(crate::Error::config("API endpoint cannot be empty"));
        }
        if self.api_token.is_empty() {
            return Err(crate::Error::config("API token cannot be empty"));
        }
        if self.http_timeout_secs == 0 {
            return Err(crate::Error::config("HTTP timeout must be > 0"));
        }
        Ok(())
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_endpoint", &self.api_endpoint)
            .field("api_token", &"<REDACTED>")
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("strict_cleanup", &self.strict_cleanup)
            .finish()
    }
}

fn default_http_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}
