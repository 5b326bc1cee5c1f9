//! Child-stream contexts
//!
//! The Organizations stream hands each of its records to the Repositories
//! stream as a typed context. Derivation is 1:1 and order-preserving: one
//! context per organization record, in the order the API returned them, no
//! dedup and no dropping.

use crate::error::{Error, Result};
use crate::types::JsonValue;
use serde::{Deserialize, Serialize};

/// Context scoping a Repositories request cycle to one organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgContext {
    /// The organization slug substituted into the request path
    pub org_slug: String,
}

impl OrgContext {
    /// Create a context from a slug
    pub fn new(org_slug: impl Into<String>) -> Self {
        Self {
            org_slug: org_slug.into(),
        }
    }

    /// Derive the context for one organization record.
    ///
    /// A record without a string `slug` cannot parameterize child requests
    /// and is a shape error attributed to the organizations stream.
    pub fn from_record(record: &JsonValue) -> Result<Self> {
        let slug = record
            .get("slug")
            .and_then(JsonValue::as_str)
            .ok_or_else(|| {
                Error::response_shape(
                    "organizations",
                    "organization record has no string 'slug' field",
                )
            })?;
        Ok(Self::new(slug))
    }

    /// Identifier used for state tracking of this context
    pub fn id(&self) -> &str {
        &self.org_slug
    }

    /// Context values for template interpolation
    pub fn template_value(&self) -> JsonValue {
        serde_json::json!({ "org_slug": self.org_slug })
    }
}

/// Derive one context per organization record, in record order
pub fn derive_contexts(records: &[JsonValue]) -> Result<Vec<OrgContext>> {
    records.iter().map(OrgContext::from_record).collect()
}
