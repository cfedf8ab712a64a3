// File: src/form_context.rs
// Purpose: Submitted values and validation errors for redisplaying a form

use std::collections::HashMap;

use crate::tag::FormTag;
use crate::validation::ValidationResult;

/// Request state a renderer needs: what was submitted, what failed, and the
/// query string for `default:get` fields.
#[derive(Debug, Clone, Default)]
pub struct FormContext {
    /// Field names to the first error message
    pub errors: HashMap<String, String>,
    /// Submitted (posted) field values
    pub values: HashMap<String, String>,
    /// Query-string parameters
    pub query: HashMap<String, String>,
}

impl FormContext {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// Context for redisplaying a form after `result` was produced from `values`.
    pub fn from_result(values: HashMap<String, String>, result: &ValidationResult) -> Self {
        Self {
            errors: result.first_errors(),
            values,
            query: HashMap::new(),
        }
    }

    pub fn with_value(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }

    pub fn with_error(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.errors.insert(field.into(), message.into());
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Submitted value of a field, empty when it was not posted.
    pub fn submitted_value(&self, field: &str) -> &str {
        self.values.get(field).map(|s| s.as_str()).unwrap_or("")
    }

    /// Get error message for a field
    pub fn validation_error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(|s| s.as_str())
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The previously submitted value wins over `default`.
    pub fn hangover(&self, field: &str, default: String) -> String {
        self.values.get(field).cloned().unwrap_or(default)
    }

    /// Value taken from the sources named by the tag's `default:` options.
    ///
    /// `get` reads the query string and `post` the submitted values, both keyed
    /// by the field name. The first non-empty match wins; otherwise `value` is
    /// returned unchanged. Unknown sources are skipped.
    pub fn default_value(&self, tag: &FormTag, value: String) -> String {
        for source in tag.default_sources() {
            let found = match source {
                "get" => self.query.get(&tag.name),
                "post" => self.values.get(&tag.name),
                _ => None,
            };
            if let Some(found) = found.filter(|v| !v.is_empty()) {
                return found.clone();
            }
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hangover_prefers_submitted_value() {
        let ctx = FormContext::default().with_value("msg", "typed before");
        assert_eq!(ctx.hangover("msg", "default".to_string()), "typed before");
        assert_eq!(ctx.hangover("other", "default".to_string()), "default");
    }

    #[test]
    fn test_from_result_keeps_first_error() {
        let tag = FormTag::new("textarea*", "msg");
        let mut result = ValidationResult::new();
        result.invalidate(&tag, "first");
        result.invalidate(&tag, "second");

        let ctx = FormContext::from_result(HashMap::new(), &result);
        assert!(ctx.has_errors());
        assert_eq!(ctx.validation_error("msg"), Some("first"));
        assert_eq!(ctx.validation_error("other"), None);
    }

    #[test]
    fn test_submitted_value_defaults_to_empty() {
        let ctx = FormContext::default().with_value("msg", "hi");
        assert_eq!(ctx.submitted_value("msg"), "hi");
        assert_eq!(ctx.submitted_value("missing"), "");
    }

    #[test]
    fn test_default_value_sources() {
        let tag = FormTag::new("textarea", "msg").with_option("default:get_post");
        let ctx = FormContext::default()
            .with_query("msg", "from query")
            .with_value("msg", "from post");
        assert_eq!(ctx.default_value(&tag, "fallback".to_string()), "from query");

        let post_only = FormContext::default().with_value("msg", "from post");
        assert_eq!(post_only.default_value(&tag, "fallback".to_string()), "from post");

        let empty = FormContext::default().with_query("msg", "");
        assert_eq!(empty.default_value(&tag, "fallback".to_string()), "fallback");
    }

    #[test]
    fn test_default_value_without_option() {
        let tag = FormTag::new("textarea", "msg");
        let ctx = FormContext::default().with_query("msg", "ignored");
        assert_eq!(ctx.default_value(&tag, "kept".to_string()), "kept");
    }
}
