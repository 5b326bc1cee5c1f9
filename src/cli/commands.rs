//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Socket.dev extraction connector CLI
#[derive(Parser, Debug)]
#[command(name = "tap-socketdev")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Inline config JSON
    #[arg(long, global = true)]
    pub config_json: Option<String>,

    /// State file (JSON)
    #[arg(short, long, global = true)]
    pub state: Option<PathBuf>,

    /// Inline state JSON
    #[arg(long, global = true)]
    pub state_json: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Test connection to the API
    Check,

    /// Print the stream catalog with schemas
    Discover,

    /// List available stream names (lightweight, no schemas)
    Streams,

    /// Read data from streams
    Read {
        /// Streams to sync (comma-separated, empty = all)
        #[arg(long)]
        streams: Option<String>,

        /// Output file for messages (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum records per run
        #[arg(long)]
        max_records: Option<usize>,

        /// Abort on the first per-organization failure instead of skipping
        #[arg(long)]
        fail_fast: bool,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}

impl From<OutputFormat> for crate::output::Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => crate::output::Format::Json,
            OutputFormat::Pretty => crate::output::Format::Pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_read_command() {
        let cli = Cli::parse_from([
            "tap-socketdev",
            "--config-json",
            r#"{"api_key": "k"}"#,
            "read",
            "--streams",
            "organizations,repositories",
            "--max-records",
            "100",
        ]);

        match cli.command {
            Commands::Read {
                streams,
                max_records,
                fail_fast,
                ..
            } => {
                assert_eq!(streams.as_deref(), Some("organizations,repositories"));
                assert_eq!(max_records, Some(100));
                assert!(!fail_fast);
            }
            other => panic!("Expected Read command, got {other:?}"),
        }
    }

    #[test]
    fn test_default_format_is_json() {
        let cli = Cli::parse_from(["tap-socketdev", "discover"]);
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
