//! State types for tracking extraction progress
//!
//! These types are serialized to JSON and persisted between runs.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Complete state for a run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct State {
    /// Per-stream state
    #[serde(default)]
    pub streams: HashMap<String, StreamState>,
}

impl State {
    /// Create a new empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Get state for a stream
    pub fn get_stream(&self, stream: &str) -> Option<&StreamState> {
        self.streams.get(stream)
    }

    /// Get mutable state for a stream, creating if needed
    pub fn get_stream_mut(&mut self, stream: &str) -> &mut StreamState {
        self.streams.entry(stream.to_string()).or_default()
    }

    /// Check if a stream has completed
    pub fn is_stream_completed(&self, stream: &str) -> bool {
        self.streams.get(stream).is_some_and(|s| s.completed)
    }
}

/// State for a single stream
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreamState {
    /// Whether this stream has been fully extracted this run
    #[serde(default)]
    pub completed: bool,

    /// Completed contexts (org_slug → done) for child streams
    #[serde(default)]
    pub contexts: HashMap<String, bool>,
}

impl StreamState {
    /// Create a new empty stream state
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a context is completed
    pub fn is_context_completed(&self, context_id: &str) -> bool {
        self.contexts.get(context_id).copied().unwrap_or(false)
    }

    /// Mark a context as completed
    pub fn mark_context_completed(&mut self, context_id: &str) {
        self.contexts.insert(context_id.to_string(), true);
    }
}
