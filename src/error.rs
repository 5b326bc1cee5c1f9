//! Error types for tap-socketdev
//!
//! This module defines the error hierarchy for the whole connector.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for tap-socketdev
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Rate limited, retry after {retry_after_seconds}s")]
    RateLimited { retry_after_seconds: u64 },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Max retries ({max_retries}) exceeded")]
    MaxRetriesExceeded { max_retries: u32 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Unexpected response shape for stream '{stream}': {message}")]
    ResponseShape { stream: String, message: String },

    #[error("Schema violation in stream '{stream}', field '{field}': {message}")]
    SchemaValidation {
        stream: String,
        field: String,
        message: String,
    },

    // ============================================================================
    // State Errors
    // ============================================================================
    #[error("State error: {message}")]
    State { message: String },

    // ============================================================================
    // Stream Errors
    // ============================================================================
    #[error("Stream '{stream}' not found in catalog")]
    StreamNotFound { stream: String },

    #[error("Context error for stream '{stream}': {message}")]
    Context { stream: String, message: String },

    // ============================================================================
    // Template Errors
    // ============================================================================
    #[error("Undefined variable in template: {variable}")]
    UndefinedVariable { variable: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a response shape error
    pub fn response_shape(stream: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ResponseShape {
            stream: stream.into(),
            message: message.into(),
        }
    }

    /// Create a schema validation error
    pub fn schema_validation(
        stream: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::SchemaValidation {
            stream: stream.into(),
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a state error
    pub fn state(message: impl Into<String>) -> Self {
        Self::State {
            message: message.into(),
        }
    }

    /// Create a context error
    pub fn context(stream: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Context {
            stream: stream.into(),
            message: message.into(),
        }
    }

    /// Create an undefined variable error
    pub fn undefined_var(variable: impl Into<String>) -> Self {
        Self::UndefinedVariable {
            variable: variable.into(),
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::RateLimited { .. } | Error::Timeout { .. } => true,
            Error::HttpStatus { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for tap-socketdev
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_field("api_key");
        assert_eq!(err.to_string(), "Missing required config field: api_key");

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");
    }

    #[test]
    fn test_response_shape_names_stream() {
        let err = Error::response_shape("organizations", "missing key 'organizations'");
        let text = err.to_string();
        assert!(text.contains("organizations"));
        assert!(text.contains("missing key"));
    }

    #[test]
    fn test_schema_validation_display() {
        let err = Error::schema_validation("repositories", "visibility", "not in allowed values");
        assert_eq!(
            err.to_string(),
            "Schema violation in stream 'repositories', field 'visibility': not in allowed values"
        );
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::RateLimited {
            retry_after_seconds: 60
        }
        .is_retryable());
        assert!(Error::Timeout { timeout_ms: 1000 }.is_retryable());
        assert!(Error::http_status(429, "").is_retryable());
        assert!(Error::http_status(500, "").is_retryable());
        assert!(Error::http_status(503, "").is_retryable());

        assert!(!Error::http_status(400, "").is_retryable());
        assert!(!Error::http_status(401, "").is_retryable());
        assert!(!Error::http_status(404, "").is_retryable());
        assert!(!Error::config("test").is_retryable());
        assert!(!Error::response_shape("reports", "not an array").is_retryable());
    }
}
