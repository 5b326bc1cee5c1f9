//! Repositories stream
//!
//! Child of the organizations stream: `GET /v0/orgs/{org_slug}/repos` for
//! each derived context, unwrapping the `repositories` mapping. Leaf
//! stream, no further contexts.

use super::StreamSpec;
use crate::decode::RecordUnwrap;
use crate::schema::{JsonSchema, JsonType, SchemaProperty};
use crate::types::Method;
use serde_json::json;

/// Stream name
pub const NAME: &str = "repositories";

/// Stream definition
pub const SPEC: StreamSpec = StreamSpec {
    name: NAME,
    method: Method::GET,
    path: "/v0/orgs/{{ context.org_slug }}/repos",
    decoder: RecordUnwrap::MappingValues {
        key: "repositories",
    },
    primary_key: &["id"],
    parent: Some(super::organizations::NAME),
};

/// Record schema
pub fn schema() -> JsonSchema {
    JsonSchema::new()
        .with_title(NAME)
        .property(
            "id",
            SchemaProperty::nullable(JsonType::String)
                .with_description("The repository's unique identifier"),
        )
        .property(
            "created_at",
            SchemaProperty::nullable(JsonType::String)
                .with_format("date-time")
                .with_description("The creation date of the repository"),
        )
        .property(
            "updated_at",
            SchemaProperty::nullable(JsonType::String)
                .with_format("date-time")
                .with_description("The last update date of the repository"),
        )
        .property(
            "slug",
            SchemaProperty::nullable(JsonType::String)
                .with_description("The slug of the repository"),
        )
        .property(
            "head_full_scan_id",
            SchemaProperty::nullable(JsonType::String)
                .with_description("The ID of the head full scan of the repository"),
        )
        .property(
            "name",
            SchemaProperty::nullable(JsonType::String)
                .with_description("The name of the repository"),
        )
        .property(
            "description",
            SchemaProperty::nullable(JsonType::String)
                .with_description("The description of the repository"),
        )
        .property(
            "homepage",
            SchemaProperty::nullable(JsonType::String)
                .with_description("The homepage URL of the repository"),
        )
        .property(
            "visibility",
            SchemaProperty::nullable(JsonType::String)
                .with_allowed_values(vec![json!("public"), json!("private")])
                .with_description("The visibility of the repository"),
        )
        .property(
            "archived",
            SchemaProperty::nullable(JsonType::Boolean)
                .with_description("Whether the repository is archived or not"),
        )
        .property(
            "default_branch",
            SchemaProperty::nullable(JsonType::String)
                .with_description("The default branch of the repository"),
        )
}
