//! CLI module
//!
//! Command-line interface for running the connector.
//!
//! # Commands
//!
//! - `check` - Test connection to the API
//! - `discover` - Print the stream catalog with schemas
//! - `streams` - List stream names (lightweight)
//! - `read` - Extract data from streams

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
