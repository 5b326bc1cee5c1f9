//! Stream definitions for the Socket.dev API
//!
//! Each stream is a static `StreamSpec`: endpoint path (optionally
//! templated with context values), response-unwrapping rule, primary key,
//! and parent link. The sync engine consumes these generically; the only
//! per-stream code beyond the table is schema construction and the
//! organizations → repositories context derivation.

pub mod organizations;
pub mod repositories;
pub mod reports;

use crate::decode::RecordUnwrap;
use crate::error::{Error, Result};
use crate::schema::JsonSchema;
use crate::types::{Method, SyncMode};

/// Declarative definition of one extraction stream
#[derive(Debug, Clone, Copy)]
pub struct StreamSpec {
    /// Unique stream name
    pub name: &'static str,
    /// HTTP method
    pub method: Method,
    /// Endpoint path relative to the base URL, may contain
    /// `{{ context.* }}` templates
    pub path: &'static str,
    /// Rule for extracting records from the response body
    pub decoder: RecordUnwrap,
    /// Primary key fields
    pub primary_key: &'static [&'static str],
    /// Name of the parent stream whose records parameterize this one
    pub parent: Option<&'static str>,
}

impl StreamSpec {
    /// Whether this stream needs a parent-derived context per request cycle
    pub fn is_child(&self) -> bool {
        self.parent.is_some()
    }

    /// The declared record schema for this stream
    pub fn schema(&self) -> JsonSchema {
        match self.name {
            organizations::NAME => organizations::schema(),
            repositories::NAME => repositories::schema(),
            reports::NAME => reports::schema(),
            other => unreachable!("unknown stream '{other}'"),
        }
    }

    /// Sync mode: every Socket.dev stream is a full re-fetch
    pub fn sync_mode(&self) -> SyncMode {
        SyncMode::FullRefresh
    }
}

/// All streams, root streams before children
pub fn all() -> &'static [StreamSpec] {
    &[reports::SPEC, organizations::SPEC, repositories::SPEC]
}

/// Look up a stream by name
pub fn find(name: &str) -> Result<&'static StreamSpec> {
    all()
        .iter()
        .find(|spec| spec.name == name)
        .ok_or_else(|| Error::StreamNotFound {
            stream: name.to_string(),
        })
}
