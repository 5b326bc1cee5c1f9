//! Record validation against a stream schema
//!
//! Checks each declared field of an unwrapped record before emission.
//! Missing fields count as null; null is fine wherever the declaration is
//! nullable. Undeclared extra fields pass through untouched.

use super::types::{JsonSchema, JsonType, SchemaProperty};
use crate::error::{Error, Result};
use crate::types::JsonValue;

/// Validate a single record against a schema, attributing failures to
/// `stream`.
pub fn validate_record(stream: &str, schema: &JsonSchema, record: &JsonValue) -> Result<()> {
    let object = record.as_object().ok_or_else(|| {
        Error::response_shape(stream, "record is not a JSON object".to_string())
    })?;

    for (name, property) in &schema.properties {
        let value = object.get(name).unwrap_or(&JsonValue::Null);

        if value.is_null() {
            if property.is_nullable() && !schema.required.contains(name) {
                continue;
            }
            return Err(Error::schema_validation(
                stream,
                name,
                "field is required but missing or null",
            ));
        }

        check_type(stream, name, property, value)?;
        check_allowed_values(stream, name, property, value)?;
        check_format(stream, name, property, value)?;
    }

    Ok(())
}

/// Check the declared primary type against the actual value
fn check_type(
    stream: &str,
    field: &str,
    property: &SchemaProperty,
    value: &JsonValue,
) -> Result<()> {
    let Some(expected) = property.json_type.primary_type() else {
        return Ok(());
    };

    let matches = match expected {
        JsonType::String => value.is_string(),
        JsonType::Number => value.is_number(),
        JsonType::Integer => value.is_i64() || value.is_u64(),
        JsonType::Boolean => value.is_boolean(),
        JsonType::Object => value.is_object(),
        JsonType::Array => value.is_array(),
        JsonType::Null => value.is_null(),
    };

    if matches {
        Ok(())
    } else {
        Err(Error::schema_validation(
            stream,
            field,
            format!("expected {expected}, got {value}"),
        ))
    }
}

/// Check enum membership when allowed values are declared
fn check_allowed_values(
    stream: &str,
    field: &str,
    property: &SchemaProperty,
    value: &JsonValue,
) -> Result<()> {
    if let Some(allowed) = &property.enum_values {
        if !allowed.contains(value) {
            return Err(Error::schema_validation(
                stream,
                field,
                format!("value {value} not in allowed values"),
            ));
        }
    }
    Ok(())
}

/// Check format hints that are verifiable locally
fn check_format(
    stream: &str,
    field: &str,
    property: &SchemaProperty,
    value: &JsonValue,
) -> Result<()> {
    if property.format.as_deref() == Some("date-time") {
        if let Some(text) = value.as_str() {
            if chrono::DateTime::parse_from_rfc3339(text).is_err() {
                return Err(Error::schema_validation(
                    stream,
                    field,
                    format!("'{text}' is not an RFC 3339 date-time"),
                ));
            }
        }
    }
    Ok(())
}
