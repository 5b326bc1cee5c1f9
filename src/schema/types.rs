//! Schema types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// JSON Schema type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    Null,
}

impl std::fmt::Display for JsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonType::String => write!(f, "string"),
            JsonType::Number => write!(f, "number"),
            JsonType::Integer => write!(f, "integer"),
            JsonType::Boolean => write!(f, "boolean"),
            JsonType::Object => write!(f, "object"),
            JsonType::Array => write!(f, "array"),
            JsonType::Null => write!(f, "null"),
        }
    }
}

/// JSON type can be a single type or array of types (for nullable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonTypeOrArray {
    Single(JsonType),
    Multiple(Vec<JsonType>),
}

impl JsonTypeOrArray {
    /// Create a single type
    pub fn single(t: JsonType) -> Self {
        JsonTypeOrArray::Single(t)
    }

    /// Create a nullable type
    pub fn nullable(t: JsonType) -> Self {
        if t == JsonType::Null {
            JsonTypeOrArray::Single(JsonType::Null)
        } else {
            JsonTypeOrArray::Multiple(vec![t, JsonType::Null])
        }
    }

    /// Check if this type is nullable
    pub fn is_nullable(&self) -> bool {
        match self {
            JsonTypeOrArray::Single(JsonType::Null) => true,
            JsonTypeOrArray::Multiple(types) => types.contains(&JsonType::Null),
            _ => false,
        }
    }

    /// Get the primary (non-null) type
    pub fn primary_type(&self) -> Option<JsonType> {
        match self {
            JsonTypeOrArray::Single(t) => Some(*t),
            JsonTypeOrArray::Multiple(types) => {
                types.iter().copied().find(|t| *t != JsonType::Null)
            }
        }
    }
}

/// JSON Schema property definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaProperty {
    /// Property type(s)
    #[serde(rename = "type")]
    pub json_type: JsonTypeOrArray,

    /// Description (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Format hint (e.g., "date-time", "uri")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Enum values (for strings with known values)
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<serde_json::Value>>,
}

impl SchemaProperty {
    /// Create a new property with the given type
    pub fn new(json_type: JsonType) -> Self {
        Self {
            json_type: JsonTypeOrArray::single(json_type),
            description: None,
            format: None,
            enum_values: None,
        }
    }

    /// Create a nullable property
    pub fn nullable(json_type: JsonType) -> Self {
        Self {
            json_type: JsonTypeOrArray::nullable(json_type),
            description: None,
            format: None,
            enum_values: None,
        }
    }

    /// Set format hint
    #[must_use]
    pub fn with_format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    /// Set description
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Set allowed values
    #[must_use]
    pub fn with_allowed_values(mut self, values: Vec<serde_json::Value>) -> Self {
        self.enum_values = Some(values);
        self
    }

    /// Check if nullable
    pub fn is_nullable(&self) -> bool {
        self.json_type.is_nullable()
    }
}

/// Full JSON Schema document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonSchema {
    /// Schema version
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Schema type (always "object" for top-level)
    #[serde(rename = "type")]
    pub json_type: JsonType,

    /// Schema title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Object properties
    #[serde(default)]
    pub properties: BTreeMap<String, SchemaProperty>,

    /// Required properties
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// Allow additional properties
    #[serde(rename = "additionalProperties", default = "default_true")]
    pub additional_properties: bool,
}

fn default_true() -> bool {
    true
}

impl Default for JsonSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonSchema {
    /// Create a new empty schema
    pub fn new() -> Self {
        Self {
            schema: Some("http://json-schema.org/draft-07/schema#".to_string()),
            json_type: JsonType::Object,
            title: None,
            properties: BTreeMap::new(),
            required: Vec::new(),
            additional_properties: true,
        }
    }

    /// Set the schema title
    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Add a property (builder form)
    #[must_use]
    pub fn property(mut self, name: &str, property: SchemaProperty) -> Self {
        self.properties.insert(name.to_string(), property);
        self
    }

    /// Get a property
    pub fn get_property(&self, name: &str) -> Option<&SchemaProperty> {
        self.properties.get(name)
    }

    /// Convert to JSON value
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
