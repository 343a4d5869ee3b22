//! # Filter Engine
//!
//! One engine serves every list page. It is parameterized by the domain's
//! [`Schema`] and holds nothing else: each call to [`FilterEngine::apply`] is a
//! pure function of the records and the [`PredicateSet`] handed in.
//!
//! ## Guarantees
//!
//! - **Stable**: matching records keep their input order.
//! - **Deterministic**: the same inputs give the same id sequence.
//! - **Idempotent**: the output can be fed back in and comes out unchanged.
//! - **Total**: malformed data never aborts a run. Problems are returned as
//!   [`FilterWarning`]s next to the result (and logged), and the affected
//!   record simply does not match.

use crate::attributes::{PredicateSet, Schema};
use crate::error::FilterWarning;
use crate::model::Record;

/// The records that passed, borrowed from the input, plus any warnings.
#[derive(Debug, Clone)]
pub struct Filtered<'r> {
    pub records: Vec<&'r Record>,
    pub warnings: Vec<FilterWarning>,
}

impl<'r> Filtered<'r> {
    pub fn ids(&self) -> Vec<&'r str> {
        self.records.iter().map(|r| r.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FilterEngine<'s> {
    schema: &'s Schema,
}

impl<'s> FilterEngine<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    /// Filter `records` by `predicates`, preserving order.
    pub fn apply<'r, I>(&self, records: I, predicates: &PredicateSet) -> Filtered<'r>
    where
        I: IntoIterator<Item = &'r Record>,
    {
        if predicates.is_unconstrained() {
            return Filtered {
                records: records.into_iter().collect(),
                warnings: Vec::new(),
            };
        }

        let mut raw_warnings = Vec::new();
        let mut total = 0usize;
        let matched: Vec<&Record> = records
            .into_iter()
            .inspect(|_| total += 1)
            .filter(|r| predicates.matches(r, self.schema, &mut raw_warnings))
            .collect();

        let warnings = dedupe(raw_warnings);
        for warning in &warnings {
            log::warn!("{}: {}", self.schema.domain, warning);
        }
        log::debug!(
            "{}: {} of {} records matched",
            self.schema.domain,
            matched.len(),
            total
        );

        Filtered {
            records: matched,
            warnings,
        }
    }

    /// Check a single record. Warnings are discarded.
    pub fn matches(&self, record: &Record, predicates: &PredicateSet) -> bool {
        let mut warnings = Vec::new();
        predicates.matches(record, self.schema, &mut warnings)
    }
}

/// Shorthand for `FilterEngine::new(schema).apply(records, predicates)`.
pub fn apply<'r, I>(records: I, predicates: &PredicateSet, schema: &Schema) -> Filtered<'r>
where
    I: IntoIterator<Item = &'r Record>,
{
    FilterEngine::new(schema).apply(records, predicates)
}

/// Drop repeated warnings, keeping first-seen order.
pub(crate) fn dedupe(warnings: Vec<FilterWarning>) -> Vec<FilterWarning> {
    let mut out: Vec<FilterWarning> = Vec::with_capacity(warnings.len());
    for w in warnings {
        if !out.contains(&w) {
            out.push(w);
        }
    }
    out
}
