use crate::commands::helpers::{select_records, Query};
use crate::commands::{CmdMessage, CmdResult, Section};
use crate::domains::Domain;
use crate::error::Result;
use crate::store::DataStore;

/// List a collection through the query.
///
/// Without a tab, results are also sectioned by the domain's layout (events by
/// status, announcements pinned first, gallery by media type). With a tab the
/// listing is already narrowed, so no sections are produced.
pub fn run<S: DataStore>(store: &S, domain: Domain, query: &Query) -> Result<CmdResult> {
    let data = store.load()?;
    let selected = select_records(&data, domain, query)?;

    let mut result = CmdResult::for_domain(domain);
    result.warnings = selected.warnings;

    if query.tab.is_none() {
        if let Some(view) = domain.layout().partition(&selected.records, domain.schema()) {
            result.sections = view
                .buckets
                .iter()
                .map(|bucket| Section {
                    name: bucket.value.to_string(),
                    records: bucket.records.iter().map(|r| (*r).clone()).collect(),
                })
                .collect();

            if !view.unbucketed.is_empty() {
                let ids: Vec<&str> = view.unbucketed.iter().map(|r| r.id.as_str()).collect();
                result.add_message(CmdMessage::warning(format!(
                    "{} {} have an unrecognised {} and are not shown in any section: {}",
                    ids.len(),
                    domain.noun(),
                    view.bucket_key,
                    ids.join(", ")
                )));
            }
            result.warnings.extend(view.warnings);
        }
    }

    if selected.records.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No {} found. Try adjusting your search criteria or filters.",
            domain.noun()
        )));
    }

    result.listed = selected.records;
    Ok(result)
}
