//! Engine types
//!
//! Message types and configuration for the sync engine.

use crate::types::JsonValue;

/// A message emitted during extraction
#[derive(Debug, Clone)]
pub enum Message {
    /// A single record
    Record {
        /// Stream name
        stream: String,
        /// The record payload
        record: JsonValue,
    },
    /// State update
    State {
        /// Stream name
        stream: String,
        /// State data (completion info)
        data: JsonValue,
    },
    /// Log message
    Log {
        /// Log level
        level: LogLevel,
        /// Log message
        message: String,
    },
}

/// Log level for engine messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug information
    Debug,
    /// General information
    Info,
    /// Warning
    Warn,
    /// Error (non-fatal)
    Error,
}

impl Message {
    /// Create a record message
    pub fn record(stream: impl Into<String>, record: JsonValue) -> Self {
        Self::Record {
            stream: stream.into(),
            record,
        }
    }

    /// Create a state message
    pub fn state(stream: impl Into<String>, data: JsonValue) -> Self {
        Self::State {
            stream: stream.into(),
            data,
        }
    }

    /// Create a log message
    pub fn log(level: LogLevel, message: impl Into<String>) -> Self {
        Self::Log {
            level,
            message: message.into(),
        }
    }

    /// Create an info log
    pub fn info(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Info, message)
    }

    /// Create a debug log
    pub fn debug(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Debug, message)
    }

    /// Create an error log
    pub fn error(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Error, message)
    }

    /// Check if this is a record message
    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record { .. })
    }

    /// Check if this is a state message
    pub fn is_state(&self) -> bool {
        matches!(self, Self::State { .. })
    }
}

/// Configuration for a sync operation
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Maximum records per stream (0 = unlimited)
    pub max_records: usize,
    /// Abort the run on the first per-context failure instead of skipping
    /// to the next organization
    pub fail_fast: bool,
    /// Validate records against the declared stream schema before emission
    pub validate: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            max_records: 0,
            fail_fast: false,
            validate: true,
        }
    }
}

impl SyncConfig {
    /// Create a new sync config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set max records
    #[must_use]
    pub fn with_max_records(mut self, max: usize) -> Self {
        self.max_records = max;
        self
    }

    /// Set fail fast mode
    #[must_use]
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Toggle schema validation
    #[must_use]
    pub fn with_validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

/// Statistics from a sync operation
#[derive(Debug, Clone, Default)]
pub struct SyncStats {
    /// Total records emitted
    pub records_synced: usize,
    /// Total pages fetched
    pub pages_fetched: usize,
    /// Total streams synced
    pub streams_synced: usize,
    /// Total contexts processed
    pub contexts_synced: usize,
    /// Errors encountered (skipped contexts)
    pub errors: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl SyncStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Add records
    pub fn add_records(&mut self, count: usize) {
        self.records_synced += count;
    }

    /// Add a page
    pub fn add_page(&mut self) {
        self.pages_fetched += 1;
    }

    /// Add a stream
    pub fn add_stream(&mut self) {
        self.streams_synced += 1;
    }

    /// Add a context
    pub fn add_context(&mut self) {
        self.contexts_synced += 1;
    }

    /// Add an error
    pub fn add_error(&mut self) {
        self.errors += 1;
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}
