//! Configuration for Mudrex SDK

use crate::error::{MudrexError, Result};
use crate::types::constants::{defaults, env};
use std::fmt;
use std::time::Duration;
use url::Url;

/// Configuration for Mudrex client
#[derive(Clone)]
pub struct Config {
    /// API secret sent in the authentication header
    api_secret: String,

    /// API base URL
    pub base_url: Url,

    /// Timeout for each HTTP round trip
    pub timeout: Duration,

    /// Minimum spacing between dispatched requests
    pub rate_limit_interval: Duration,
}

impl Config {
    /// Create a configuration for the production API
    ///
    /// # Arguments
    ///
    /// * `api_secret` - API secret from the Mudrex dashboard
    pub fn new(api_secret: impl Into<String>) -> Result<Self> {
        let api_secret = api_secret.into();
        if api_secret.trim().is_empty() {
            return Err(MudrexError::config("API secret must not be empty"));
        }

        Ok(Self {
            api_secret,
            base_url: parse_base_url(defaults::BASE_URL)?,
            timeout: defaults::TIMEOUT,
            rate_limit_interval: defaults::RATE_LIMIT_INTERVAL,
        })
    }

    /// Build a configuration from `MUDREX_API_SECRET`, and optionally
    /// `MUDREX_BASE_URL` and `MUDREX_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        let secret = std::env::var(env::API_SECRET)
            .map_err(|_| MudrexError::config(format!("{} is not set", env::API_SECRET)))?;
        let mut config = Self::new(secret)?;

        if let Ok(base_url) = std::env::var(env::BASE_URL) {
            config = config.with_base_url(&base_url)?;
        }

        if let Ok(timeout) = std::env::var(env::TIMEOUT_SECS) {
            let secs = timeout.trim().parse::<u64>().map_err(|e| {
                MudrexError::config(format!("Invalid {}: {}: {}", env::TIMEOUT_SECS, timeout, e))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Point the client at another deployment
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the minimum spacing between requests
    pub fn with_rate_limit_interval(mut self, interval: Duration) -> Self {
        self.rate_limit_interval = interval;
        self
    }

    /// The API secret
    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_secret", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("rate_limit_interval", &self.rate_limit_interval)
            .finish()
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| MudrexError::config(format!("Invalid base URL {}: {}", raw, e)))?;
    match url.scheme() {
        "https" | "http" => Ok(url),
        other => Err(MudrexError::config(format!("Unsupported URL scheme: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new("secret").unwrap();
        assert_eq!(config.base_url.as_str(), "https://trade.mudrex.com/fapi/v1");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.rate_limit_interval, Duration::from_millis(500));
        assert_eq!(config.api_secret(), "secret");
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(matches!(Config::new("  "), Err(MudrexError::Config(_))));
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::new("secret")
            .unwrap()
            .with_base_url("http://127.0.0.1:8080/fapi/v1")
            .unwrap()
            .with_timeout(Duration::from_secs(5))
            .with_rate_limit_interval(Duration::from_millis(100));
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8080/fapi/v1");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.rate_limit_interval, Duration::from_millis(100));
    }

    #[test]
    fn test_invalid_base_url() {
        let config = Config::new("secret").unwrap();
        assert!(config.clone().with_base_url("not a url").is_err());
        assert!(config.with_base_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", Config::new("super-secret-value").unwrap());
        assert!(!rendered.contains("super-secret-value"));
        assert!(rendered.contains("<redacted>"));
    }
}
