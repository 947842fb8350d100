//! Configuration module for the Skrymi client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::time::Duration;

use reqwest::Url;

use crate::errors::ClientError;

/// Backend used when `SKRYMI_BACKEND_URL` is unset (local development).
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend serving `/api/*`
    pub backend_url: Url,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Timeout for request/response calls; the push stream is not bounded by it
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ClientError> {
        dotenvy::dotenv().ok();

        let backend_url = env::var("SKRYMI_BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        let backend_url = Url::parse(&backend_url).map_err(|e| {
            ClientError::Config(format!("Invalid SKRYMI_BACKEND_URL {backend_url:?}: {e}"))
        })?;

        let log_level = env::var("SKRYMI_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let request_timeout = match env::var("SKRYMI_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map(Duration::from_secs).map_err(|e| {
                ClientError::Config(format!("Invalid SKRYMI_REQUEST_TIMEOUT_SECS {raw:?}: {e}"))
            })?,
            Err(_) => Duration::from_secs(10),
        };

        Ok(Self {
            backend_url,
            log_level,
            request_timeout,
        })
    }

    /// Configuration pointing at an explicit backend, with default logging and timeout.
    #[cfg(test)]
    pub fn with_backend(backend_url: Url) -> Self {
        Self {
            backend_url,
            log_level: "info".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("SKRYMI_BACKEND_URL");
        env::remove_var("SKRYMI_LOG_LEVEL");
        env::remove_var("SKRYMI_REQUEST_TIMEOUT_SECS");

        let config = Config::from_env().unwrap();

        assert_eq!(config.backend_url.as_str(), "http://localhost:8001/");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_with_backend() {
        let url = Url::parse("http://127.0.0.1:9000").unwrap();
        let config = Config::with_backend(url.clone());

        assert_eq!(config.backend_url, url);
        assert_eq!(config.log_level, "info");
    }
}
