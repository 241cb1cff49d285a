//! Configuration management for the dashboard
//!
//! The set of status pages is compiled in (see [`crate::registry`]); this only
//! covers how the pages are fetched and how the run is logged.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Per-request timeout. `None` leaves the HTTP client default in place.
    pub http_timeout: Option<Duration>,

    /// User agent sent with every status request
    pub user_agent: String,

    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,

    /// Emit logs as JSON lines instead of human-readable text
    pub json_logs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_timeout: None,
            user_agent: format!("downdev_detector/{}", env!("CARGO_PKG_VERSION")),
            log_level: "warn".to_string(),
            json_logs: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(timeout) = env::var("HTTP_TIMEOUT_SECONDS") {
            if let Ok(seconds) = timeout.parse::<u64>() {
                config.http_timeout = Some(Duration::from_secs(seconds));
            }
        }

        if let Ok(user_agent) = env::var("USER_AGENT") {
            config.user_agent = user_agent;
        }

        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.log_level = log_level;
        }

        if let Ok(log_format) = env::var("LOG_FORMAT") {
            config.json_logs = log_format.to_lowercase() == "json";
        }

        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.user_agent.trim().is_empty() {
            return Err("user_agent cannot be empty".to_string());
        }

        if self.log_level.trim().is_empty() {
            return Err("log_level cannot be empty".to_string());
        }

        if self.http_timeout == Some(Duration::ZERO) {
            return Err("http_timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_timeout() {
        let config = Config::default();
        assert!(config.http_timeout.is_none());
        assert!(config.user_agent.starts_with("downdev_detector/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = Config {
            http_timeout: Some(Duration::ZERO),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_user_agent_rejected() {
        let config = Config {
            user_agent: "  ".to_string(),
            ..Config::default()
        };
        assert_eq!(
            config.validate().unwrap_err(),
            "user_agent cannot be empty"
        );
    }
}
