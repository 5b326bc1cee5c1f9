//! State manager implementation
//!
//! File-based state persistence with atomic writes, plus an in-memory
//! mode for tests and one-shot runs.

use super::types::State;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// State manager for persisting and loading state
#[derive(Debug)]
pub struct StateManager {
    /// Path to the state file (empty = in-memory)
    path: PathBuf,
    /// Current state (cached)
    state: Arc<RwLock<State>>,
    /// Whether to auto-save on every update
    auto_save: bool,
}

impl StateManager {
    /// Create an in-memory state manager (no file persistence)
    pub fn in_memory() -> Self {
        Self {
            path: PathBuf::new(),
            state: Arc::new(RwLock::new(State::new())),
            auto_save: false,
        }
    }

    /// Create a state manager from a file, loading existing state if present
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let state = if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|e| Error::State {
                message: format!("Failed to read state file: {e}"),
            })?;
            serde_json::from_str(&contents).map_err(|e| Error::State {
                message: format!("Failed to parse state file: {e}"),
            })?
        } else {
            State::new()
        };

        Ok(Self {
            path,
            state: Arc::new(RwLock::new(state)),
            auto_save: true,
        })
    }

    /// Create a state manager from an inline JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let state: State = serde_json::from_str(json).map_err(|e| Error::State {
            message: format!("Failed to parse state JSON: {e}"),
        })?;

        Ok(Self {
            path: PathBuf::new(),
            state: Arc::new(RwLock::new(state)),
            auto_save: false,
        })
    }

    /// Save current state to file
    pub async fn save(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Ok(()); // In-memory mode
        }

        let state = self.state.read().await;
        let contents = serde_json::to_string_pretty(&*state).map_err(|e| Error::State {
            message: format!("Failed to serialize state: {e}"),
        })?;

        // Write to temp file first, then rename for atomicity
        let temp_path = self.path.with_extension("tmp");
        tokio::fs::write(&temp_path, &contents)
            .await
            .map_err(|e| Error::State {
                message: format!("Failed to write state file: {e}"),
            })?;

        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| Error::State {
                message: format!("Failed to rename state file: {e}"),
            })?;

        Ok(())
    }

    /// Export state as JSON string
    pub async fn to_json(&self) -> Result<String> {
        let state = self.state.read().await;
        serde_json::to_string(&*state).map_err(|e| Error::State {
            message: format!("Failed to serialize state: {e}"),
        })
    }

    /// Check if a stream is completed
    pub async fn is_stream_completed(&self, stream: &str) -> bool {
        let state = self.state.read().await;
        state.is_stream_completed(stream)
    }

    /// Mark a stream as completed
    pub async fn mark_stream_completed(&self, stream: &str) -> Result<()> {
        {
            let mut state = self.state.write().await;
            state.get_stream_mut(stream).completed = true;
        }

        if self.auto_save {
            self.save().await?;
        }

        Ok(())
    }

    /// Check if a context is completed
    pub async fn is_context_completed(&self, stream: &str, context_id: &str) -> bool {
        let state = self.state.read().await;
        state
            .get_stream(stream)
            .is_some_and(|s| s.is_context_completed(context_id))
    }

    /// Mark a context as completed
    pub async fn mark_context_completed(&self, stream: &str, context_id: &str) -> Result<()> {
        {
            let mut state = self.state.write().await;
            state
                .get_stream_mut(stream)
                .mark_context_completed(context_id);
        }

        if self.auto_save {
            self.save().await?;
        }

        Ok(())
    }

    /// Clear all state
    pub async fn clear(&self) -> Result<()> {
        {
            let mut state = self.state.write().await;
            *state = State::new();
        }

        if self.auto_save {
            self.save().await?;
        }

        Ok(())
    }

    /// Get the state file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if using in-memory mode
    pub fn is_in_memory(&self) -> bool {
        self.path.as_os_str().is_empty()
    }
}

impl Clone for StateManager {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            state: Arc::clone(&self.state),
            auto_save: self.auto_save,
        }
    }
}
