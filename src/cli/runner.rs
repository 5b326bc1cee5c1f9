//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::TapConfig;
use crate::engine::{SyncConfig, SyncEngine};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::output::{Format, MessageWriter};
use crate::state::StateManager;
use crate::streams::{self, StreamSpec};
use serde_json::json;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Check => self.check().await,
            Commands::Discover => self.discover(),
            Commands::Streams => self.streams(),
            Commands::Read {
                streams,
                output,
                max_records,
                fail_fast,
            } => {
                self.read(
                    streams.as_deref(),
                    output.as_deref(),
                    *max_records,
                    *fail_fast,
                )
                .await
            }
        }
    }

    /// Load configuration (inline takes precedence over file)
    fn load_config(&self) -> Result<TapConfig> {
        if let Some(json) = &self.cli.config_json {
            return TapConfig::from_json(json);
        }
        if let Some(path) = &self.cli.config {
            return TapConfig::from_file(path);
        }
        Err(Error::config(
            "No configuration given (use --config or --config-json)",
        ))
    }

    /// Load state (inline takes precedence over file)
    fn load_state(&self) -> Result<StateManager> {
        if let Some(state_json) = &self.cli.state_json {
            StateManager::from_json(state_json)
        } else if let Some(path) = &self.cli.state {
            StateManager::from_file(path)
        } else {
            Ok(StateManager::in_memory())
        }
    }

    /// Check connection by fetching the organizations endpoint
    async fn check(&self) -> Result<()> {
        let config = self.load_config()?;
        let client = HttpClient::from_tap_config(&config);

        info!("Checking connection to {}", config.base_url);

        let status = match client.get("/v0/organizations").await {
            Ok(_) => json!({
                "type": "CONNECTION_STATUS",
                "connectionStatus": { "status": "SUCCEEDED" }
            }),
            Err(e) => json!({
                "type": "CONNECTION_STATUS",
                "connectionStatus": { "status": "FAILED", "message": e.to_string() }
            }),
        };

        println!("{}", serde_json::to_string(&status)?);
        Ok(())
    }

    /// Print the stream catalog
    fn discover(&self) -> Result<()> {
        let catalog: Vec<_> = streams::all()
            .iter()
            .map(|spec| {
                json!({
                    "name": spec.name,
                    "json_schema": spec.schema().to_json(),
                    "supported_sync_modes": [spec.sync_mode()],
                    "source_defined_primary_key": [spec.primary_key],
                    "parent_stream": spec.parent,
                })
            })
            .collect();

        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "streams": catalog }))?
        );
        Ok(())
    }

    /// List stream names
    fn streams(&self) -> Result<()> {
        for spec in streams::all() {
            println!("{}", spec.name);
        }
        Ok(())
    }

    /// Run extraction
    async fn read(
        &self,
        stream_names: Option<&str>,
        output: Option<&std::path::Path>,
        max_records: Option<usize>,
        fail_fast: bool,
    ) -> Result<()> {
        let config = self.load_config()?;
        let state = self.load_state()?;
        let selected = parse_selection(stream_names)?;

        let client = HttpClient::from_tap_config(&config);
        let sync_config = SyncConfig::new()
            .with_max_records(max_records.unwrap_or(0))
            .with_fail_fast(fail_fast);

        let mut engine = SyncEngine::new(Box::new(client), state).with_config(sync_config);
        let messages = engine.sync(&selected).await?;

        let format: Format = self.cli.format.into();
        match output {
            Some(path) => {
                let mut writer = MessageWriter::to_file(path, format)?;
                writer.write_all(&messages)?;
            }
            None => {
                let mut writer = MessageWriter::stdout(format);
                writer.write_all(&messages)?;
            }
        }

        let stats = engine.stats();
        info!(
            "Synced {} records across {} streams ({} contexts, {} errors) in {}ms",
            stats.records_synced,
            stats.streams_synced,
            stats.contexts_synced,
            stats.errors,
            stats.duration_ms
        );

        engine.state().save().await?;
        Ok(())
    }
}

/// Resolve a comma-separated stream selection, defaulting to all streams
fn parse_selection(names: Option<&str>) -> Result<Vec<&'static StreamSpec>> {
    match names {
        None => Ok(streams::all().iter().collect()),
        Some(list) => list
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(streams::find)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection_all() {
        let selected = parse_selection(None).unwrap();
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn test_parse_selection_subset() {
        let selected = parse_selection(Some("organizations, repositories")).unwrap();
        let names: Vec<&str> = selected.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["organizations", "repositories"]);
    }

    #[test]
    fn test_parse_selection_unknown() {
        let err = parse_selection(Some("packages")).unwrap_err();
        assert!(err.to_string().contains("packages"));
    }

    #[test]
    fn test_parse_selection_ignores_empty_segments() {
        let selected = parse_selection(Some("reports,,")).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "reports");
    }
}
