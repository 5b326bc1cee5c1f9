//! Auth configuration types

use serde::{Deserialize, Serialize};

/// Location for API key placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// Place in HTTP header
    #[default]
    Header,
    /// Place in query parameter
    Query,
}

/// Authentication configuration
#[derive(Debug, Clone, Default)]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// API Key authentication (header or query)
    ApiKey {
        /// Where to place the API key
        location: Location,
        /// Header name (for header location)
        header_name: Option<String>,
        /// Query parameter name (for query location)
        query_param: Option<String>,
        /// Prefix to add before the value (e.g., "Bearer ")
        prefix: Option<String>,
        /// The API key value
        value: String,
    },

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },

    /// Bearer token authentication
    Bearer {
        /// The bearer token
        token: String,
    },
}

impl AuthConfig {
    /// Socket.dev auth: Basic with the API key as username, empty password
    pub fn socketdev(api_key: impl Into<String>) -> Self {
        Self::Basic {
            username: api_key.into(),
            password: String::new(),
        }
    }
}
