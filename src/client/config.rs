//! Client configuration.
//!
//! Provides configuration options for the HTTP client.

use std::time::Duration;

/// Default base URL for the API.
pub const DEFAULT_BASE_URL: &str = "https://api.indiepitcher.com/v1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the API.
    pub base_url: String,

    /// API key sent as a bearer credential on every request.
    pub api_key: String,

    /// Request timeout.
    pub timeout: Duration,

    /// User agent string.
    pub user_agent: String,
}

impl ClientConfig {
    /// Creates a new configuration with the given API key and default
    /// settings.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("indiepitcher-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), super::error::Error> {
        if self.api_key.is_empty() {
            return Err(super::error::Error::InvalidConfig(
                "api_key cannot be empty".to_string(),
            ));
        }

        if self.base_url.is_empty() {
            return Err(super::error::Error::InvalidConfig(
                "base_url cannot be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(super::error::Error::InvalidConfig(
                "base_url must start with http:// or https://".to_string(),
            ));
        }

        Ok(())
    }
}
