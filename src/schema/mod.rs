//! Stream schemas
//!
//! Declarative field schemas for emitted records (JSON Schema draft-07
//! shaped) and validation of unwrapped records against them.

mod types;
mod validate;

pub use types::{JsonSchema, JsonType, JsonTypeOrArray, SchemaProperty};
pub use validate::validate_record;
