//! Client configuration shared by the endpoint clients and the service
//!
//! A single immutable `ClientConfig` carries the API key, the base URL and
//! the per-request timeout. Both endpoint clients hold a clone of the same
//! value, so the credential is defined in exactly one place.

use std::time::Duration;

/// Base URL for the Hunter.io v2 API
const HUNTER_BASE_URL: &str = "https://api.hunter.io/v2";

/// Default per-request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for talking to the Hunter.io API
///
/// The API key is set at construction time and cannot change afterwards.
/// `base_url` exists so tests can point the clients at a local mock server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key attached to every request as the `api_key` query parameter
    pub(crate) api_key: String,
    /// Base URL for the API, without a trailing slash
    pub(crate) base_url: String,
    /// Timeout applied to every outbound request
    pub(crate) timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration for the production Hunter.io API
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: HUNTER_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Overrides the base URL (useful for pointing tests at a mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        self.base_url = base_url;
        self
    }

    /// Overrides the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
