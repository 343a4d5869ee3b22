use crate::commands::CmdResult;
use crate::domains::Domain;
use crate::error::Result;
use crate::store::DataStore;

/// Show one record. Opening a gallery item counts as a view and is saved.
pub fn run<S: DataStore>(store: &mut S, domain: Domain, id: &str) -> Result<CmdResult> {
    let mut data = store.load()?;

    if domain == Domain::Gallery {
        data = data.with_gallery_view(id)?;
        store.save(&data)?;
    }

    let record = data.find_record(domain, id)?;
    Ok(CmdResult::for_domain(domain).with_listed(vec![record]))
}
