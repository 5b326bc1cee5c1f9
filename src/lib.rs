//! # tap-socketdev
//!
//! Extraction connector for the Socket.dev security-scanning API.
//!
//! Three declarative streams ride a small generic engine:
//!
//! - **reports**: `GET /v0/report/list`, a bare JSON array
//! - **organizations**: `GET /v0/organizations`, unwrapped from the
//!   `organizations` mapping; each record derives an `OrgContext`
//! - **repositories**: `GET /v0/orgs/{org_slug}/repos` per context,
//!   unwrapped from the `repositories` mapping
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tap_socketdev::config::TapConfig;
//! use tap_socketdev::engine::SyncEngine;
//! use tap_socketdev::http::HttpClient;
//! use tap_socketdev::state::StateManager;
//! use tap_socketdev::streams;
//!
//! #[tokio::main]
//! async fn main() -> tap_socketdev::Result<()> {
//!     let config = TapConfig::from_json(r#"{"api_key": "..."}"#)?;
//!     let client = HttpClient::from_tap_config(&config);
//!
//!     let mut engine = SyncEngine::new(Box::new(client), StateManager::in_memory());
//!     let selected: Vec<_> = streams::all().iter().collect();
//!     let messages = engine.sync(&selected).await?;
//!
//!     for msg in &messages {
//!         // Deliver records downstream
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Stream Specs                          │
//! │   reports        organizations ──contexts──▶ repositories    │
//! └──────────────────────────────┬───────────────────────────────┘
//!                                │
//! ┌──────────┬──────────┬────────┴──────┬───────────┬────────────┐
//! │   Auth   │   HTTP   │    Engine     │   State   │   Output   │
//! ├──────────┼──────────┼───────────────┼───────────┼────────────┤
//! │ Basic    │ GET      │ Unwrap        │ Stream    │ JSON lines │
//! │ API Key  │ Retry    │ Validate      │ Context   │ Pretty     │
//! │ Bearer   │ RateLimit│ Fan-out       │ Resume    │            │
//! └──────────┴──────────┴───────────────┴───────────┴────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)] // TODO: Add docs before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the connector
pub mod error;

/// Common types and type aliases
pub mod types;

/// Connector configuration
pub mod config;

/// Authentication implementations
pub mod auth;

/// HTTP client with retry and rate limiting
pub mod http;

/// Template interpolation for request paths
pub mod template;

/// Response unwrapping
pub mod decode;

/// Stream schemas and record validation
pub mod schema;

/// Child-stream contexts
pub mod context;

/// Stream definitions
pub mod streams;

/// Pagination seam
pub mod pagination;

/// State tracking
pub mod state;

/// Record emission
pub mod output;

/// Main execution engine
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
