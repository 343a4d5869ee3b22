//! Field specifications and per-domain schemas.
//!
//! This module defines the schema for record fields: what kind of value each
//! holds and which filtering capabilities it takes part in.

use super::Value;
use serde::Serialize;
use std::fmt;

/// The kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Bool,
    List,
}

impl FieldKind {
    /// The value an absent or malformed field reads as.
    pub fn empty(self) -> Value {
        match self {
            FieldKind::Text => Value::Text(String::new()),
            FieldKind::Number => Value::Number(0),
            FieldKind::Bool => Value::Bool(false),
            FieldKind::List => Value::List(Vec::new()),
        }
    }

    /// Parse user input (a dropdown value or CLI argument) into a value of this kind.
    ///
    /// Lists are comma separated; surrounding whitespace is trimmed from each item.
    pub fn parse(self, raw: &str) -> Option<Value> {
        match self {
            FieldKind::Text => Some(Value::Text(raw.to_string())),
            FieldKind::Number => raw.trim().parse().ok().map(Value::Number),
            FieldKind::Bool => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" => Some(Value::Bool(true)),
                "false" | "no" => Some(Value::Bool(false)),
                _ => None,
            },
            FieldKind::List => Some(Value::List(
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            )),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Bool => "bool",
            FieldKind::List => "list",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Specification for a single field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// The field name used in records and filters (e.g. "club", "year")
    pub name: &'static str,

    /// Human heading (e.g. "Join Date"); also the CSV column header
    pub label: &'static str,

    pub kind: FieldKind,

    /// Included in free-text search
    pub searchable: bool,

    /// Offered as an equality filter
    pub filterable: bool,

    /// Usable as a bucket discriminator
    pub partitionable: bool,

    /// Written by CSV export
    pub exported: bool,

    /// Option lists are shown largest first instead of first-seen order
    ///
    /// Only gallery years use this, so the newest year leads the dropdown.
    pub newest_first: bool,

    /// Fixed option list, used instead of values derived from the data
    pub choices: Option<&'static [&'static str]>,
}

impl FieldSpec {
    /// Create a new field spec with all capabilities off.
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            searchable: false,
            filterable: false,
            partitionable: false,
            exported: false,
            newest_first: false,
            choices: None,
        }
    }

    pub const fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    pub const fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    pub const fn partitionable(mut self) -> Self {
        self.partitionable = true;
        self
    }

    pub const fn exported(mut self) -> Self {
        self.exported = true;
        self
    }

    pub const fn newest_first(mut self) -> Self {
        self.newest_first = true;
        self
    }

    pub const fn choices(mut self, choices: &'static [&'static str]) -> Self {
        self.choices = Some(choices);
        self
    }
}

/// The declared fields of one domain.
///
/// This is the single source of truth for how a collection is searched,
/// filtered, partitioned and exported. Adding a filter to a page means
/// flipping a flag here.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    /// Collection name (e.g. "members")
    pub domain: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Schema {
    pub const fn new(domain: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self { domain, fields }
    }

    /// Look up a field spec by name.
    pub fn get(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    pub fn searchable(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(|spec| spec.searchable)
    }

    pub fn filterable(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(|spec| spec.filterable)
    }

    pub fn partitionable(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(|spec| spec.partitionable)
    }

    pub fn exported(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(|spec| spec.exported)
    }
}
