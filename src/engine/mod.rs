//! Execution engine module
//!
//! Main read loop and stream orchestration.
//!
//! # Overview
//!
//! The engine owns the whole request/unwrap/validate/emit cycle and the
//! organizations → repositories fan-out. Streams stay declarative: the
//! engine renders their path template, executes it through the injected
//! `RequestExecutor`, drives the paginator until it signals completion,
//! unwraps and validates records, and emits `Message`s.

mod types;

pub use types::{LogLevel, Message, SyncConfig, SyncStats};

use crate::context::OrgContext;
use crate::error::Result;
use crate::http::RequestExecutor;
use crate::pagination::{NextPage, PaginationState, Paginator, SinglePage};
use crate::schema::validate_record;
use crate::state::StateManager;
use crate::streams::{self, organizations, StreamSpec};
use crate::template::{self, TemplateContext};
use crate::types::JsonValue;
use std::time::Instant;
use tracing::{debug, warn};

/// Sync engine for orchestrating data extraction
pub struct SyncEngine {
    /// Request executor (HTTP client in production, mock in tests)
    executor: Box<dyn RequestExecutor>,
    /// State manager
    state: StateManager,
    /// Sync configuration
    config: SyncConfig,
    /// Statistics
    stats: SyncStats,
}

impl SyncEngine {
    /// Create a new sync engine
    pub fn new(executor: Box<dyn RequestExecutor>, state: StateManager) -> Self {
        Self {
            executor,
            state,
            config: SyncConfig::default(),
            stats: SyncStats::default(),
        }
    }

    /// Set sync configuration
    #[must_use]
    pub fn with_config(mut self, config: SyncConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the state manager
    pub fn state(&self) -> &StateManager {
        &self.state
    }

    /// Get statistics
    pub fn stats(&self) -> &SyncStats {
        &self.stats
    }

    /// Run extraction for the selected streams.
    ///
    /// Roots run in registry order. A child stream runs under every context
    /// its parent derives; selecting a child without its parent still
    /// fetches the parent for context derivation, without emitting parent
    /// records.
    pub async fn sync(&mut self, selected: &[&'static StreamSpec]) -> Result<Vec<Message>> {
        let start = Instant::now();
        let mut messages = Vec::new();

        let is_selected =
            |name: &str| selected.iter().any(|spec| spec.name == name);

        for root in streams::all().iter().filter(|spec| !spec.is_child()) {
            let root_selected = is_selected(root.name);
            let children: Vec<&StreamSpec> = streams::all()
                .iter()
                .filter(|child| child.parent == Some(root.name) && is_selected(child.name))
                .collect();

            if !root_selected && children.is_empty() {
                continue;
            }

            messages.push(Message::info(format!(
                "Starting sync for stream: {}",
                root.name
            )));

            let records = self.run_cycle(root, None).await?;

            if root_selected {
                self.emit_records(root, &records, &mut messages)?;
                self.state.mark_stream_completed(root.name).await?;
                self.stats.add_stream();
                messages.push(Message::state(
                    root.name,
                    serde_json::json!({ "completed": true }),
                ));
            }

            if !children.is_empty() {
                let contexts = derive_child_contexts(root, &records)?;
                messages.push(Message::debug(format!(
                    "Derived {} contexts from {}",
                    contexts.len(),
                    root.name
                )));

                for child in children {
                    let failures = self
                        .sync_child(child, &contexts, &mut messages)
                        .await?;

                    self.stats.add_stream();
                    if failures == 0 {
                        self.state.mark_stream_completed(child.name).await?;
                        messages.push(Message::state(
                            child.name,
                            serde_json::json!({ "completed": true }),
                        ));
                    }
                }
            }
        }

        self.stats.set_duration(start.elapsed().as_millis() as u64);

        messages.push(Message::info(format!(
            "Sync complete: {} records, {} errors",
            self.stats.records_synced, self.stats.errors
        )));

        Ok(messages)
    }

    /// Run one child stream across all derived contexts.
    ///
    /// A failing context is skipped and counted unless `fail_fast` is set;
    /// siblings keep going. Returns the number of skipped contexts.
    async fn sync_child(
        &mut self,
        child: &StreamSpec,
        contexts: &[OrgContext],
        messages: &mut Vec<Message>,
    ) -> Result<usize> {
        let mut failures = 0;

        for context in contexts {
            if self
                .state
                .is_context_completed(child.name, context.id())
                .await
            {
                debug!("Skipping completed context: {}", context.id());
                messages.push(Message::debug(format!(
                    "Skipping completed context: {}",
                    context.id()
                )));
                continue;
            }

            let outcome = match self.run_cycle(child, Some(context)).await {
                Ok(records) => self.emit_records(child, &records, messages),
                Err(e) => Err(e),
            };

            match outcome {
                Ok(()) => {
                    self.state
                        .mark_context_completed(child.name, context.id())
                        .await?;
                    self.stats.add_context();
                }
                Err(e) => {
                    self.stats.add_error();
                    failures += 1;
                    warn!("Error in context {}: {e}", context.id());
                    messages.push(Message::error(format!(
                        "Error in context {}: {e}",
                        context.id()
                    )));
                    if self.config.fail_fast {
                        return Err(e);
                    }
                }
            }
        }

        Ok(failures)
    }

    /// Execute one full request cycle for a stream, following the
    /// paginator until it signals completion
    async fn run_cycle(
        &mut self,
        spec: &StreamSpec,
        context: Option<&OrgContext>,
    ) -> Result<Vec<JsonValue>> {
        let mut template_ctx = TemplateContext::new();
        if let Some(context) = context {
            template_ctx.set_context(context.template_value());
        }
        let path = template::render(spec.path, &template_ctx)?;

        let paginator: &dyn Paginator = &SinglePage;
        let mut query = paginator.initial_params();
        let mut pagination_state = PaginationState::new();
        let mut records = Vec::new();

        loop {
            let body = self.executor.execute(spec.method, &path, &query).await?;
            let page_records = spec.decoder.records(spec.name, &body)?;
            let count = page_records.len();

            self.stats.add_page();
            debug!("{}: fetched {count} records from {path}", spec.name);
            records.extend(page_records);

            match paginator.process_response(&body, count, &mut pagination_state) {
                NextPage::Continue { query_params } => {
                    query.extend(query_params);
                }
                NextPage::Done => break,
            }
        }

        Ok(records)
    }

    /// Validate and emit records for a stream
    fn emit_records(
        &mut self,
        spec: &StreamSpec,
        records: &[JsonValue],
        messages: &mut Vec<Message>,
    ) -> Result<()> {
        let schema = spec.schema();

        for record in records {
            if self.config.max_records > 0 && self.stats.records_synced >= self.config.max_records
            {
                messages.push(Message::debug(format!(
                    "Record limit {} reached, truncating {}",
                    self.config.max_records, spec.name
                )));
                break;
            }

            if self.config.validate {
                validate_record(spec.name, &schema, record)?;
            }

            messages.push(Message::record(spec.name, record.clone()));
            self.stats.add_records(1);
        }

        Ok(())
    }
}

/// Derive child contexts for a parent stream's records
fn derive_child_contexts(parent: &StreamSpec, records: &[JsonValue]) -> Result<Vec<OrgContext>> {
    match parent.name {
        organizations::NAME => organizations::child_contexts(records),
        other => Err(crate::error::Error::context(
            other,
            "stream does not derive child contexts",
        )),
    }
}
