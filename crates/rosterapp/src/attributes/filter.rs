//! Search and selection state.
//!
//! A [`PredicateSet`] is what a list page's search box and "All X" dropdowns
//! hold. Its filter slots are fixed when it is built: one per filterable field
//! the schema declares, each starting at [`Selection::All`]. Selecting a field
//! outside that set is a caller error, so stray field names never reach the
//! matcher.

use super::{FieldKind, FieldSpec, Schema, Value};
use crate::error::{FilterWarning, Result, RosterError};
use crate::model::{FieldRead, Record};

/// The state of one equality dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// No constraint.
    #[default]
    All,
    /// The record's value must equal this one.
    Only(Value),
}

impl Selection {
    /// Parse dropdown/CLI input for the given field. `"all"` (any case) means no constraint.
    ///
    /// List fields offer their elements as options, so a single value on a list
    /// field selects by membership. Only comma-separated input selects a whole list.
    pub fn parse(spec: &FieldSpec, raw: &str) -> Result<Self> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Ok(Selection::All);
        }
        if spec.kind == FieldKind::List && !raw.contains(',') {
            return Ok(Selection::Only(Value::Text(raw.trim().to_string())));
        }
        spec.kind
            .parse(raw)
            .map(Selection::Only)
            .ok_or_else(|| RosterError::InvalidValue {
                field: spec.name.to_string(),
                value: raw.to_string(),
                expected: spec.kind,
            })
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Selection::All => None,
            Selection::Only(v) => Some(v),
        }
    }
}

/// Current free-text search and equality selections for one domain.
#[derive(Debug, Clone)]
pub struct PredicateSet {
    domain: &'static str,
    search_term: String,
    filters: Vec<(&'static FieldSpec, Selection)>,
}

impl PredicateSet {
    /// Build the default state for a schema: empty search, every filter at `All`.
    pub fn new(schema: &Schema) -> Self {
        Self {
            domain: schema.domain,
            search_term: String::new(),
            filters: schema
                .filterable()
                .map(|spec| (spec, Selection::All))
                .collect(),
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.set_search(term);
        self
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn domain(&self) -> &'static str {
        self.domain
    }

    /// Set the selection for a filterable field.
    pub fn select(&mut self, field: &str, selection: Selection) -> Result<()> {
        let domain = self.domain;
        let (spec, slot) = self
            .filters
            .iter_mut()
            .find(|(spec, _)| spec.name == field)
            .ok_or_else(|| RosterError::UnknownField {
                domain: domain.to_string(),
                field: field.to_string(),
            })?;

        if let Selection::Only(value) = &selection {
            let compatible = value.kind() == spec.kind
                || (spec.kind == FieldKind::List && value.as_text().is_some());
            if !compatible {
                return Err(RosterError::InvalidValue {
                    field: field.to_string(),
                    value: value.to_string(),
                    expected: spec.kind,
                });
            }
        }

        *slot = selection;
        Ok(())
    }

    /// Parse and set a selection from raw input.
    pub fn select_raw(&mut self, field: &str, raw: &str) -> Result<()> {
        let spec = self
            .filters
            .iter()
            .map(|(spec, _)| *spec)
            .find(|spec| spec.name == field)
            .ok_or_else(|| RosterError::UnknownField {
                domain: self.domain.to_string(),
                field: field.to_string(),
            })?;
        let selection = Selection::parse(spec, raw)?;
        self.select(field, selection)
    }

    /// The current selection for a field, if it is one of this set's slots.
    pub fn selection(&self, field: &str) -> Option<&Selection> {
        self.filters
            .iter()
            .find(|(spec, _)| spec.name == field)
            .map(|(_, selection)| selection)
    }

    /// All slots in declaration order.
    pub fn slots(&self) -> impl Iterator<Item = (&'static FieldSpec, &Selection)> {
        self.filters.iter().map(|(spec, sel)| (*spec, sel))
    }

    /// Slots that currently constrain the result.
    pub fn active(&self) -> impl Iterator<Item = (&'static FieldSpec, &Value)> {
        self.filters
            .iter()
            .filter_map(|(spec, sel)| sel.value().map(|v| (*spec, v)))
    }

    /// True when no predicate constrains the result (empty search, all `All`).
    pub fn is_unconstrained(&self) -> bool {
        self.search_term.is_empty() && self.filters.iter().all(|(_, sel)| sel.is_all())
    }

    /// Restore the defaults.
    pub fn reset(&mut self) {
        self.search_term.clear();
        for (_, selection) in &mut self.filters {
            *selection = Selection::All;
        }
    }

    /// Check a record against the search term AND every active selection.
    ///
    /// `schema` is the schema the caller is filtering with; it may differ from
    /// the one this set was built from. Problems go to `warnings`, never panic.
    pub fn matches(
        &self,
        record: &Record,
        schema: &Schema,
        warnings: &mut Vec<FilterWarning>,
    ) -> bool {
        self.matches_search(record, schema, warnings) && self.matches_filters(record, schema, warnings)
    }

    fn matches_search(
        &self,
        record: &Record,
        schema: &Schema,
        warnings: &mut Vec<FilterWarning>,
    ) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();

        // Every searchable field is read, so malformed values are reported even
        // after an earlier field already matched.
        let mut found = false;
        for spec in schema.searchable() {
            match record.read(spec) {
                FieldRead::Present(value) => found |= value.contains_text(&needle),
                FieldRead::Absent => {}
                FieldRead::Malformed(_) => warnings.push(malformed(record, spec)),
            }
        }
        found
    }

    fn matches_filters(
        &self,
        record: &Record,
        schema: &Schema,
        warnings: &mut Vec<FilterWarning>,
    ) -> bool {
        for (spec, wanted) in self.active() {
            if schema.get(spec.name).is_none() {
                warnings.push(FilterWarning::InvalidFieldReference {
                    domain: schema.domain.to_string(),
                    field: spec.name.to_string(),
                });
                return false;
            }

            let ok = match record.read(spec) {
                FieldRead::Present(value) => value.satisfies(wanted),
                FieldRead::Absent => spec.kind.empty().satisfies(wanted),
                FieldRead::Malformed(_) => {
                    warnings.push(malformed(record, spec));
                    spec.kind.empty().satisfies(wanted)
                }
            };
            if !ok {
                return false;
            }
        }
        true
    }
}

fn malformed(record: &Record, spec: &FieldSpec) -> FilterWarning {
    FilterWarning::MalformedValue {
        record_id: record.id.clone(),
        field: spec.name.to_string(),
        expected: spec.kind,
    }
}
