use crate::commands::{CmdMessage, CmdResult};
use crate::config::RosterConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
}

pub fn run(config: &RosterConfig, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let mut result = CmdResult::default().with_config(config.clone());
            let data = config.data_path()?;
            result.add_message(CmdMessage::info(format!(
                "Data file: {}",
                data.display()
            )));
            Ok(result)
        }
        ConfigAction::ShowKey(key) => {
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
    }
}
