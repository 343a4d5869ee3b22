//! Field value types.
//!
//! This module defines the runtime representation of a record's field values
//! and the two comparisons filtering needs: substring search and selection
//! equality.

use super::FieldKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime representation of a field value.
///
/// Serialized untagged so records read and write as plain JSON scalars/arrays.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean flag (e.g., `is_pinned`)
    Bool(bool),

    /// Whole number (e.g., `year`, `views`)
    Number(i64),

    /// Free or enumerated text (e.g., `name`, `status`)
    Text(String),

    /// List of strings (e.g., `tags`)
    List(Vec<String>),
}

impl Value {
    /// The kind of this value.
    pub fn kind(&self) -> FieldKind {
        match self {
            Value::Bool(_) => FieldKind::Bool,
            Value::Number(_) => FieldKind::Number,
            Value::Text(_) => FieldKind::Text,
            Value::List(_) => FieldKind::List,
        }
    }

    /// Whether this is the empty value of its kind.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Bool(b) => !b,
            Value::Number(n) => *n == 0,
            Value::Text(s) => s.is_empty(),
            Value::List(v) => v.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    /// Case-insensitive substring test used by free-text search.
    ///
    /// `needle` must already be lowercased. Lists match element-wise, numbers
    /// on their decimal rendering. Booleans never match text.
    pub fn contains_text(&self, needle: &str) -> bool {
        match self {
            Value::Text(s) => s.to_lowercase().contains(needle),
            Value::Number(n) => n.to_string().contains(needle),
            Value::List(items) => items.iter().any(|s| s.to_lowercase().contains(needle)),
            Value::Bool(_) => false,
        }
    }

    /// Check whether this field value satisfies an equality selection.
    ///
    /// Same-kind values compare exactly. A text selection against a list
    /// matches when the list holds that exact element.
    pub fn satisfies(&self, wanted: &Value) -> bool {
        match (self, wanted) {
            (Value::List(items), Value::Text(t)) => items.iter().any(|s| s == t),
            (a, b) => a == b,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
            Value::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n.into())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::List(v)
    }
}

impl From<Vec<&str>> for Value {
    fn from(v: Vec<&str>) -> Self {
        Value::List(v.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_text_is_case_insensitive() {
        let v = Value::from("Environmental Cleanup Campaign");
        assert!(v.contains_text("cleanup"));
        assert!(v.contains_text("env"));
        assert!(!v.contains_text("blood"));
    }

    #[test]
    fn contains_text_matches_list_elements() {
        let v = Value::from(vec!["Blood-Drive", "urgent"]);
        assert!(v.contains_text("blood"));
        assert!(v.contains_text("urg"));
        assert!(!v.contains_text("conference"));
    }

    #[test]
    fn contains_text_on_numbers_uses_decimal_form() {
        assert!(Value::Number(2023).contains_text("202"));
        assert!(!Value::Number(2023).contains_text("2024"));
    }

    #[test]
    fn booleans_never_match_search() {
        assert!(!Value::Bool(true).contains_text("true"));
    }

    #[test]
    fn satisfies_requires_exact_equality() {
        assert!(Value::from("admin").satisfies(&Value::from("admin")));
        assert!(!Value::from("admin").satisfies(&Value::from("Admin")));
        assert!(Value::Number(2023).satisfies(&Value::Number(2023)));
        assert!(!Value::Number(2023).satisfies(&Value::from("2023")));
    }

    #[test]
    fn list_satisfies_element_or_whole_list() {
        let tags = Value::from(vec!["district", "conference"]);
        assert!(tags.satisfies(&Value::from("district")));
        assert!(!tags.satisfies(&Value::from("dist")));
        assert!(tags.satisfies(&Value::from(vec!["district", "conference"])));
        assert!(!tags.satisfies(&Value::from(vec!["district"])));
    }

    #[test]
    fn empty_values_per_kind() {
        assert!(Value::from("").is_empty());
        assert!(Value::Number(0).is_empty());
        assert!(Value::Bool(false).is_empty());
        assert!(Value::List(vec![]).is_empty());
        assert!(!Value::from("x").is_empty());
    }

    #[test]
    fn display_joins_lists() {
        assert_eq!(Value::from(vec!["a", "b"]).to_string(), "a, b");
        assert_eq!(Value::Number(7).to_string(), "7");
    }

    #[test]
    fn deserializes_untagged_json() {
        let values: Vec<Value> = serde_json::from_str(r#"[true, 12, "x", ["a"]]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Value::Bool(true),
                Value::Number(12),
                Value::from("x"),
                Value::from(vec!["a"]),
            ]
        );
    }
}
