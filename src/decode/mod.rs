//! Response unwrapping
//!
//! Turns a parsed JSON response body into individual records according to
//! the rule a stream declares. The Socket.dev API answers either with a
//! bare array (reports) or with an envelope object whose single interesting
//! key maps opaque identifiers to record objects (organizations,
//! repositories); the mapping's keys are discarded and its values become
//! the records, in the order the API returned them.

use crate::error::{Error, Result};
use crate::types::JsonValue;

/// Rule for extracting records from a response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordUnwrap {
    /// The body is a JSON array; its elements are the records
    Array,
    /// The body is an object; `key` holds a mapping whose values are the
    /// records
    MappingValues {
        /// Envelope key carrying the record mapping
        key: &'static str,
    },
}

impl RecordUnwrap {
    /// Extract records from a response body.
    ///
    /// A missing envelope key is a hard shape error attributed to `stream`,
    /// never a silent empty result. An empty array or empty mapping yields
    /// zero records without error.
    pub fn records(&self, stream: &str, body: &JsonValue) -> Result<Vec<JsonValue>> {
        match self {
            RecordUnwrap::Array => match body {
                JsonValue::Array(items) => Ok(items.clone()),
                other => Err(Error::response_shape(
                    stream,
                    format!("expected a JSON array, got {}", json_type_name(other)),
                )),
            },
            RecordUnwrap::MappingValues { key } => {
                let envelope = body.as_object().ok_or_else(|| {
                    Error::response_shape(
                        stream,
                        format!("expected a JSON object, got {}", json_type_name(body)),
                    )
                })?;
                let mapping = envelope.get(*key).ok_or_else(|| {
                    Error::response_shape(stream, format!("missing key '{key}' in response"))
                })?;
                let mapping = mapping.as_object().ok_or_else(|| {
                    Error::response_shape(
                        stream,
                        format!("'{key}' is not an object mapping"),
                    )
                })?;
                // serde_json's preserve_order feature keeps source order here
                Ok(mapping.values().cloned().collect())
            }
        }
    }
}

/// Human-readable JSON type name for error messages
fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests;
