//! Organizations stream
//!
//! `GET /v0/organizations` answers with an envelope whose `organizations`
//! key maps opaque identifiers to organization objects. Every record also
//! seeds one `OrgContext` for the repositories stream.

use super::StreamSpec;
use crate::context::{derive_contexts, OrgContext};
use crate::decode::RecordUnwrap;
use crate::error::Result;
use crate::schema::{JsonSchema, JsonType, SchemaProperty};
use crate::types::{JsonValue, Method};

/// Stream name
pub const NAME: &str = "organizations";

/// Stream definition
pub const SPEC: StreamSpec = StreamSpec {
    name: NAME,
    method: Method::GET,
    path: "/v0/organizations",
    decoder: RecordUnwrap::MappingValues {
        key: "organizations",
    },
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
                .with_description("The organization's unique identifier"),
        )
        .property(
            "name",
            SchemaProperty::nullable(JsonType::String)
                .with_description("The organization's name"),
        )
        .property(
            "image",
            SchemaProperty::nullable(JsonType::String)
                .with_description("The organization's image"),
        )
        .property(
            "plan",
            SchemaProperty::nullable(JsonType::String)
                .with_description("The organization's plan"),
        )
}

/// Derive one child context per organization record, in record order
pub fn child_contexts(records: &[JsonValue]) -> Result<Vec<OrgContext>> {
    derive_contexts(records)
}
