use crate::commands::{CmdMessage, CmdResult};
use crate::domains::{Dataset, Domain};
use crate::error::Result;
use crate::store::DataStore;

/// Seed an empty store with the sample dataset. An existing store is left untouched.
pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.exists() {
        result.add_message(CmdMessage::info(
            "Roster data already exists; nothing to do.",
        ));
        return Ok(result);
    }

    let data = Dataset::sample()?;
    store.save(&data)?;

    let counts: Vec<String> = Domain::ALL
        .iter()
        .map(|d| format!("{} {}", data.len(*d), d.noun()))
        .collect();
    result.add_message(CmdMessage::success(format!(
        "Initialized roster data with {}",
        counts.join(", ")
    )));
    Ok(result)
}
