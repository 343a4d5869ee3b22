//! # Records
//!
//! The filtering machinery never sees `Member` or `Event` directly. Each domain
//! type flattens itself into a [`Record`]: a stable id plus a map of field name
//! to [`Value`]. Optional fields that are unset are simply left out of the map.
//!
//! ## Reading Fields
//!
//! A record is always read through a [`FieldSpec`], which says what kind the
//! value should be. [`Record::read`] reports one of three outcomes:
//!
//! - **Present**: the value is there and has the declared kind.
//! - **Absent**: the field is missing; callers treat it as the kind's empty value.
//! - **Malformed**: the value has the wrong kind; callers coerce it to empty and
//!   report a [`crate::error::FilterWarning::MalformedValue`].
//!
//! A list field also accepts a bare text value as a one-element list, since
//! hand-edited data files often write `"tags": "social"`.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::attributes::{FieldKind, FieldSpec, Value};

/// One entity of a collection, as seen by the filter engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub fields: BTreeMap<String, Value>,
}

/// Result of reading a field through its spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRead<'a> {
    Present(Cow<'a, Value>),
    Absent,
    Malformed(&'a Value),
}

impl Record {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter.
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    /// Like [`Record::with`], but leaves the field absent for `None`.
    pub fn with_opt<V: Into<Value>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.with(name, v),
            None => self,
        }
    }

    /// Raw access without kind checking.
    pub fn get_attr(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn read(&self, spec: &FieldSpec) -> FieldRead<'_> {
        match self.fields.get(spec.name) {
            None => FieldRead::Absent,
            Some(value) if value.kind() == spec.kind => FieldRead::Present(Cow::Borrowed(value)),
            Some(Value::Text(s)) if spec.kind == FieldKind::List => {
                FieldRead::Present(Cow::Owned(Value::List(vec![s.clone()])))
            }
            Some(value) => FieldRead::Malformed(value),
        }
    }

    /// The field's value, or the empty value of its kind when absent or malformed.
    pub fn value_or_empty(&self, spec: &FieldSpec) -> Value {
        match self.read(spec) {
            FieldRead::Present(value) => value.into_owned(),
            FieldRead::Absent | FieldRead::Malformed(_) => spec.kind.empty(),
        }
    }

    /// Display text for a field, empty when absent.
    pub fn text(&self, name: &str) -> String {
        self.fields
            .get(name)
            .map(|v| v.to_string())
            .unwrap_or_default()
    }
}

/// A domain type that can be filtered.
pub trait Entity {
    fn id(&self) -> &str;
    fn to_record(&self) -> Record;
}
