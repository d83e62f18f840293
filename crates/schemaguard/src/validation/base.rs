//! Validation context and shared predicates over untyped JSON values
//!
//! Copyright (c) 2025 Schemaguard Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How optional members decide whether they are "set"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Any non-null value counts as set and must have the right shape
    #[default]
    Strict,
    /// Only truthy values count as set; `false`, `0` and `""` are skipped
    Lenient,
}

/// Validation context tracking where in the document a check runs
#[derive(Debug, Clone)]
pub struct ValidationContext {
    /// Current JSON path
    pub path: String,
    /// Validation mode
    pub mode: ValidationMode,
}

impl ValidationContext {
    /// Create a root context (`$`)
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            path: "$".to_string(),
            mode,
        }
    }

    /// Create a child context with updated path
    pub fn child<P: AsRef<str>>(&self, path_segment: P) -> Self {
        Self {
            path: format!("{}.{}", self.path, path_segment.as_ref()),
            mode: self.mode,
        }
    }

    /// Create a child context for array index
    pub fn child_index(&self, index: usize) -> Self {
        Self {
            path: format!("{}[{}]", self.path, index),
            mode: self.mode,
        }
    }

    /// Path of a member of the current value, without building a context
    pub fn member_path(&self, key: &str) -> String {
        format!("{}.{}", self.path, key)
    }

    /// Look up an optional member, returning it only when it counts as set
    pub fn optional<'v>(&self, value: &'v Value, key: &str) -> Option<&'v Value> {
        value
            .get(key)
            .filter(|member| ValidationHelpers::is_set(member, self.mode))
    }
}

/// Helper predicates for common validation patterns
pub struct ValidationHelpers;

impl ValidationHelpers {
    /// The member `key` of `value` when it is a non-empty string
    pub fn non_empty_str<'v>(value: &'v Value, key: &str) -> Option<&'v str> {
        value
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// JavaScript truthiness of a JSON value
    pub fn is_truthy(value: &Value) -> bool {
        match value {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    /// Whether an optional member counts as present under `mode`
    pub fn is_set(value: &Value, mode: ValidationMode) -> bool {
        match mode {
            ValidationMode::Strict => !value.is_null(),
            ValidationMode::Lenient => Self::is_truthy(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validation_context_child() {
        let context = ValidationContext::new(ValidationMode::Strict);
        let child = context.child("tables");
        assert_eq!(child.path, "$.tables");

        let indexed = child.child_index(2).child("columns");
        assert_eq!(indexed.path, "$.tables[2].columns");
        assert_eq!(indexed.member_path("name"), "$.tables[2].columns.name");
    }

    #[test]
    fn test_non_empty_str() {
        let value = json!({"name": "orders", "empty": "", "number": 5});
        assert_eq!(ValidationHelpers::non_empty_str(&value, "name"), Some("orders"));
        assert_eq!(ValidationHelpers::non_empty_str(&value, "empty"), None);
        assert_eq!(ValidationHelpers::non_empty_str(&value, "number"), None);
        assert_eq!(ValidationHelpers::non_empty_str(&value, "missing"), None);
        assert_eq!(ValidationHelpers::non_empty_str(&json!("name"), "name"), None);
    }

    #[test]
    fn test_truthiness() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!ValidationHelpers::is_truthy(&falsy), "{} should be falsy", falsy);
        }
        for truthy in [json!(true), json!(1), json!("no"), json!([]), json!({})] {
            assert!(ValidationHelpers::is_truthy(&truthy), "{} should be truthy", truthy);
        }
    }

    #[test]
    fn test_optional_respects_mode() {
        let value = json!({"required": 0, "tables": null});
        let strict = ValidationContext::new(ValidationMode::Strict);
        let lenient = ValidationContext::new(ValidationMode::Lenient);

        assert!(strict.optional(&value, "required").is_some());
        assert!(lenient.optional(&value, "required").is_none());
        assert!(strict.optional(&value, "tables").is_none());
        assert!(lenient.optional(&value, "tables").is_none());
        assert!(strict.optional(&value, "missing").is_none());
    }
}
