//! Authentication module
//!
//! Supports: API Key (header or query), Basic, Bearer.
//!
//! Socket.dev uses HTTP Basic with the API key as username and an empty
//! password; `AuthConfig::socketdev` builds that configuration.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, Location};

#[cfg(test)]
mod tests;
