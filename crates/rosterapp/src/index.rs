//! # Filter Options
//!
//! Every "All X" dropdown lists the distinct values found in the collection.
//! Options are drawn from the **full** collection, never the filtered one, so
//! the dropdowns do not shrink as the user narrows the list. Callers rebuild the
//! index when the collection changes, not when the predicates change.
//!
//! ## Ordering
//!
//! Values appear in first-seen order: the order of the records that introduce
//! them. Two field flags adjust that:
//!
//! - `choices`: the field has a fixed option list (event categories,
//!   announcement priorities); it is used as is, whatever the data holds.
//! - `newest_first`: values are sorted descending (gallery years).
//!
//! List fields (tags) contribute each element as its own option.

use serde::Serialize;
use std::collections::HashSet;

use crate::attributes::{FieldKind, Schema, Value};
use crate::model::Record;

/// Distinct values of a field, by value equality, in first-seen order.
///
/// Absent fields contribute nothing. The result never holds more entries than
/// there are records.
pub fn distinct_values<'r, I>(records: I, field: &str) -> Vec<Value>
where
    I: IntoIterator<Item = &'r Record>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in records.into_iter().filter_map(|r| r.get_attr(field)) {
        if seen.insert(value) {
            out.push(value.clone());
        }
    }
    out
}

/// Distinct elements of a list field across all records, in first-seen order.
///
/// A bare text value counts as a single element.
pub fn distinct_elements<'r, I>(records: I, field: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'r Record>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in records.into_iter().filter_map(|r| r.get_attr(field)) {
        let items: &[String] = match value {
            Value::List(items) => items,
            Value::Text(s) => std::slice::from_ref(s),
            _ => continue,
        };
        for item in items {
            if seen.insert(item.as_str()) {
                out.push(item.clone());
            }
        }
    }
    out
}

/// The option list for one filterable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOptions {
    pub field: &'static str,
    pub label: &'static str,
    pub values: Vec<Value>,
}

/// Option lists for every filterable field of a schema.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FieldIndex {
    options: Vec<FieldOptions>,
}

impl FieldIndex {
    pub fn build(records: &[Record], schema: &Schema) -> Self {
        let options = schema
            .filterable()
            .map(|spec| {
                let mut values: Vec<Value> = if let Some(choices) = spec.choices {
                    choices.iter().map(|c| Value::from(*c)).collect()
                } else if spec.kind == FieldKind::List {
                    distinct_elements(records, spec.name)
                        .into_iter()
                        .map(Value::Text)
                        .collect()
                } else {
                    // Values of the wrong kind would never satisfy a selection.
                    distinct_values(records, spec.name)
                        .into_iter()
                        .filter(|v| v.kind() == spec.kind)
                        .collect()
                };

                if spec.newest_first {
                    values.sort_by(|a, b| b.cmp(a));
                }

                FieldOptions {
                    field: spec.name,
                    label: spec.label,
                    values,
                }
            })
            .collect();

        Self { options }
    }

    pub fn options(&self, field: &str) -> Option<&FieldOptions> {
        self.options.iter().find(|o| o.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldOptions> {
        self.options.iter()
    }

    pub fn into_options(self) -> Vec<FieldOptions> {
        self.options
    }
}
