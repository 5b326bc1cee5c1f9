//! Template interpolation for request paths
//!
//! Handles `{{ variable }}` interpolation in endpoint paths and query
//! parameters. Supports nested access like `{{ config.api_key }}` and
//! `{{ context.org_slug }}`.

use crate::error::{Error, Result};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Regex for matching template variables: {{ variable.path }}
static TEMPLATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([a-zA-Z_][a-zA-Z0-9_]*(?:\.[a-zA-Z_][a-zA-Z0-9_]*)*)\s*\}\}").unwrap()
});

/// Context for template interpolation
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    /// Connector configuration values
    pub config: Value,
    /// Current stream context values (e.g. the org_slug of a child cycle)
    pub context: Value,
}

impl TemplateContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create context with config values
    pub fn with_config(config: Value) -> Self {
        Self {
            config,
            context: Value::Null,
        }
    }

    /// Set config values
    pub fn set_config(&mut self, config: Value) -> &mut Self {
        self.config = config;
        self
    }

    /// Set stream context values
    pub fn set_context(&mut self, context: Value) -> &mut Self {
        self.context = context;
        self
    }

    /// Get a value by path (e.g., "context.org_slug")
    pub fn get(&self, path: &str) -> Option<&Value> {
        let parts: Vec<&str> = path.split('.').collect();
        if parts.is_empty() {
            return None;
        }

        let root = match parts[0] {
            "config" => &self.config,
            "context" => &self.context,
            // Top-level names fall back to config fields
            _ => return get_nested_value(&self.config, &parts),
        };

        if parts.len() == 1 {
            Some(root)
        } else {
            get_nested_value(root, &parts[1..])
        }
    }
}

/// Get a nested value from a JSON value by path
fn get_nested_value<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for part in path {
        match current {
            Value::Object(map) => {
                current = map.get(*part)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Render a template string with the given context
pub fn render(template: &str, ctx: &TemplateContext) -> Result<String> {
    let mut result = template.to_string();
    let mut errors = Vec::new();

    for cap in TEMPLATE_REGEX.captures_iter(template) {
        let full_match = cap.get(0).unwrap().as_str();
        let var_path = cap.get(1).unwrap().as_str();

        match ctx.get(var_path) {
            Some(value) => {
                let replacement = value_to_string(value);
                result = result.replace(full_match, &replacement);
            }
            None => {
                errors.push(var_path.to_string());
            }
        }
    }

    if errors.is_empty() {
        Ok(result)
    } else {
        Err(Error::undefined_var(errors.join(", ")))
    }
}

/// Check if a string contains template variables
pub fn has_templates(s: &str) -> bool {
    TEMPLATE_REGEX.is_match(s)
}

/// Convert a JSON value to a string for template substitution
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        // For complex types, use JSON serialization
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_substitution() {
        let ctx = TemplateContext::with_config(json!({
            "api_key": "sk_test_123"
        }));

        let result = render("Bearer {{ config.api_key }}", &ctx).unwrap();
        assert_eq!(result, "Bearer sk_test_123");
    }

    #[test]
    fn test_context_substitution() {
        let mut ctx = TemplateContext::new();
        ctx.set_context(json!({"org_slug": "acme"}));

        let result = render("/v0/orgs/{{ context.org_slug }}/repos", &ctx).unwrap();
        assert_eq!(result, "/v0/orgs/acme/repos");
    }

    #[test]
    fn test_multiple_substitutions() {
        let ctx = TemplateContext::with_config(json!({
            "host": "api.socket.dev",
            "version": "v0"
        }));

        let result = render(
            "https://{{ config.host }}/{{ config.version }}/organizations",
            &ctx,
        )
        .unwrap();
        assert_eq!(result, "https://api.socket.dev/v0/organizations");
    }

    #[test]
    fn test_undefined_variable() {
        let ctx = TemplateContext::new();
        let result = render("{{ context.org_slug }}", &ctx);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("context.org_slug"));
    }

    #[test]
    fn test_no_templates() {
        let ctx = TemplateContext::new();
        let result = render("/v0/report/list", &ctx).unwrap();
        assert_eq!(result, "/v0/report/list");
    }

    #[test]
    fn test_has_templates() {
        assert!(has_templates("{{ config.key }}"));
        assert!(has_templates("/v0/orgs/{{ context.org_slug }}/repos"));
        assert!(!has_templates("/v0/organizations"));
        assert!(!has_templates("{ not a template }"));
    }

    #[test]
    fn test_whitespace_in_template() {
        let mut ctx = TemplateContext::new();
        ctx.set_context(json!({"org_slug": "acme"}));

        assert_eq!(render("{{context.org_slug}}", &ctx).unwrap(), "acme");
        assert_eq!(render("{{ context.org_slug }}", &ctx).unwrap(), "acme");
        assert_eq!(render("{{  context.org_slug  }}", &ctx).unwrap(), "acme");
    }
}
