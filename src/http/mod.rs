//! HTTP client with retry and rate limiting
//!
//! The `HttpClient` executes requests against the Socket.dev API; the
//! `RequestExecutor` trait is the seam the sync engine depends on, so
//! tests can substitute a mock transport.

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};

use crate::error::Result;
use crate::types::{JsonValue, Method, StringMap};
use async_trait::async_trait;

/// Narrow request-execution interface consumed by the sync engine.
///
/// `path` is already template-rendered and relative to the configured base
/// URL; the executor owns auth, retries, and rate limiting.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Execute a request and return the parsed JSON body
    async fn execute(&self, method: Method, path: &str, query: &StringMap) -> Result<JsonValue>;
}

#[cfg(test)]
mod tests;
