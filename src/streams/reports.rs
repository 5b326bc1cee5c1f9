//! Reports stream
//!
//! `GET /v0/report/list` answers with a bare JSON array of report
//! metadata. Root stream, no parent, no children.

use super::StreamSpec;
use crate::decode::RecordUnwrap;
use crate::schema::{JsonSchema, JsonType, SchemaProperty};
use crate::types::Method;

/// Stream name
pub const NAME: &str = "reports";

/// Stream definition
pub const SPEC: StreamSpec = StreamSpec {
    name: NAME,
    method: Method::GET,
    path: "/v0/report/list",
    decoder: RecordUnwrap::Array,
    primary_key: &["id"],
    parent: None,
};

/// Record schema
pub fn schema() -> JsonSchema {
    JsonSchema::new()
        .with_title(NAME)
        .property(
            "id",
            SchemaProperty::nullable(JsonType::String)
                .with_description("The report's unique identifier"),
        )
        .property(
            "url",
            SchemaProperty::nullable(JsonType::String)
                .with_description("The URL to the report"),
        )
}
