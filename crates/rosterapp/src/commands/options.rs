use crate::commands::CmdResult;
use crate::domains::Domain;
use crate::error::Result;
use crate::index::FieldIndex;
use crate::store::DataStore;

/// Option lists for every filter dropdown, drawn from the whole collection.
pub fn run<S: DataStore>(store: &S, domain: Domain) -> Result<CmdResult> {
    let data = store.load()?;
    let records = data.records(domain);
    let index = FieldIndex::build(&records, domain.schema());

    let mut result = CmdResult::for_domain(domain);
    result.options = index.into_options();
    Ok(result)
}
