use crate::commands::{CmdMessage, CmdResult};
use crate::domains::Domain;
use crate::error::Result;
use crate::store::DataStore;

/// Mark an announcement as read. Already-read announcements are left alone.
pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let data = store.load()?;
    let mut result = CmdResult::for_domain(Domain::Announcements);

    let already_read = data
        .announcements
        .iter()
        .find(|a| a.id == id)
        .map(|a| a.is_read);

    if already_read == Some(true) {
        let record = data.find_record(Domain::Announcements, id)?;
        result.add_message(CmdMessage::info(format!(
            "'{}' is already marked as read",
            record.text("title")
        )));
        return Ok(result.with_affected(vec![record]));
    }

    let data = data.with_announcement_read(id)?;
    store.save(&data)?;

    let record = data.find_record(Domain::Announcements, id)?;
    result.add_message(CmdMessage::success(format!(
        "Marked '{}' as read",
        record.text("title")
    )));
    Ok(result.with_affected(vec![record]))
}
