//! Authenticator implementation
//!
//! Applies authentication to outgoing requests. All supported schemes are
//! static (no token refresh), so application is synchronous.

use super::types::{AuthConfig, Location};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::RequestBuilder;

/// Authenticator handles applying authentication to HTTP requests
#[derive(Debug, Clone)]
pub struct Authenticator {
    /// Auth configuration
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.config {
            AuthConfig::None => req,

            AuthConfig::ApiKey {
                location,
                header_name,
                query_param,
                prefix,
                value,
            } => {
                let val = format!("{}{}", prefix.as_deref().unwrap_or(""), value);
                match location {
                    Location::Header => {
                        let header = header_name.as_deref().unwrap_or("Authorization");
                        req.header(header, val)
                    }
                    Location::Query => {
                        let param = query_param.as_deref().unwrap_or("api_key");
                        req.query(&[(param, val)])
                    }
                }
            }

            AuthConfig::Basic { username, password } => {
                let credentials = STANDARD.encode(format!("{username}:{password}"));
                req.header("Authorization", format!("Basic {credentials}"))
            }

            AuthConfig::Bearer { token } => req.bearer_auth(token),
        }
    }

    /// The configured auth scheme
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }
}
