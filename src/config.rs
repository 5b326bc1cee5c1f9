//! Connector configuration
//!
//! Runtime settings for a Socket.dev extraction run, loaded from a JSON
//! file or inline JSON.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default Socket.dev API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.socket.dev";

/// Connector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TapConfig {
    /// Socket.dev API key
    pub api_key: String,

    /// Base URL for API requests
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum number of retries
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Rate limit (requests per second), None disables rate limiting
    #[serde(default)]
    pub rate_limit_rps: Option<u32>,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

impl TapConfig {
    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::config(format!("Invalid config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| Error::config(format!("Failed to read config file: {e}")))?;
        Self::from_json(&content)
    }

    /// Validate required fields and URL shape
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(Error::missing_field("api_key"));
        }
        let parsed = url::Url::parse(&self.base_url)?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(Error::InvalidConfigValue {
                field: "base_url".to_string(),
                message: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        Ok(())
    }

    /// Config as a JSON value for template interpolation (api_key redacted)
    pub fn template_value(&self) -> serde_json::Value {
        serde_json::json!({
            "base_url": self.base_url,
            "timeout_secs": self.timeout_secs,
            "max_retries": self.max_retries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config() {
        let config = TapConfig::from_json(r#"{"api_key": "sk_test"}"#).unwrap();
        assert_eq!(config.api_key, "sk_test");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.max_retries, 3);
        assert!(config.rate_limit_rps.is_none());
    }

    #[test]
    fn test_full_config() {
        let config = TapConfig::from_json(
            r#"{
                "api_key": "sk_test",
                "base_url": "https://api.example.com",
                "timeout_secs": 10,
                "max_retries": 5,
                "rate_limit_rps": 2,
                "user_agent": "custom/1.0"
            }"#,
        )
        .unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.rate_limit_rps, Some(2));
        assert_eq!(config.user_agent.as_deref(), Some("custom/1.0"));
    }

    #[test]
    fn test_missing_api_key() {
        let err = TapConfig::from_json(r#"{"api_key": ""}"#).unwrap_err();
        assert_eq!(err.to_string(), "Missing required config field: api_key");
    }

    #[test]
    fn test_invalid_base_url() {
        let err =
            TapConfig::from_json(r#"{"api_key": "k", "base_url": "not a url"}"#).unwrap_err();
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err =
            TapConfig::from_json(r#"{"api_key": "k", "base_url": "ftp://api.socket.dev"}"#)
                .unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn test_template_value_redacts_api_key() {
        let config = TapConfig::from_json(r#"{"api_key": "sk_secret"}"#).unwrap();
        let value = config.template_value();
        assert!(value.get("api_key").is_none());
        assert_eq!(value["base_url"], DEFAULT_BASE_URL);
    }
}
