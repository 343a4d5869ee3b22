use crate::attributes::PredicateSet;
use crate::domains::{Dataset, Domain};
use crate::engine::FilterEngine;
use crate::error::{FilterWarning, Result, RosterError};
use crate::model::Record;

/// What the user typed into a list page: search box, dropdowns and the active tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub search: Option<String>,
    /// `(field, raw value)` pairs; `"all"` clears a field.
    pub filters: Vec<(String, String)>,
    pub tab: Option<String>,
}

impl Query {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Default::default()
        }
    }

    pub fn with_filter(mut self, field: &str, value: &str) -> Self {
        self.filters.push((field.to_string(), value.to_string()));
        self
    }

    pub fn with_tab(mut self, tab: &str) -> Self {
        self.tab = Some(tab.to_string());
        self
    }

    /// Parse a `field=value` argument.
    pub fn parse_filter(raw: &str) -> Result<(String, String)> {
        let (field, value) = raw.split_once('=').ok_or_else(|| {
            RosterError::Validation(format!("Expected field=value, got '{}'", raw))
        })?;
        let field = field.trim();
        if field.is_empty() {
            return Err(RosterError::Validation(format!(
                "Missing field name in '{}'",
                raw
            )));
        }
        Ok((field.to_string(), value.trim().to_string()))
    }
}

/// The search term is trimmed, so a whitespace-only term does not constrain.
pub fn predicates(domain: Domain, query: &Query) -> Result<PredicateSet> {
    let mut predicates = PredicateSet::new(domain.schema());
    if let Some(term) = &query.search {
        predicates.set_search(term.trim());
    }
    for (field, value) in &query.filters {
        predicates.select_raw(field, value)?;
    }
    Ok(predicates)
}

/// Records that pass the query, in collection order.
pub struct Selected {
    pub records: Vec<Record>,
    pub warnings: Vec<FilterWarning>,
}

/// Run the query's predicates, then narrow to its tab (if any).
pub fn select_records(data: &Dataset, domain: Domain, query: &Query) -> Result<Selected> {
    let predicates = predicates(domain, query)?;
    let tab = query.tab.as_deref().map(|t| domain.tab(t)).transpose()?;

    let all = data.records(domain);
    let filtered = FilterEngine::new(domain.schema()).apply(&all, &predicates);
    let records = filtered
        .records
        .iter()
        .filter(|r| tab.map_or(true, |t| t.rule.matches(r)))
        .map(|r| (*r).clone())
        .collect();

    Ok(Selected {
        records,
        warnings: filtered.warnings,
    })
}
