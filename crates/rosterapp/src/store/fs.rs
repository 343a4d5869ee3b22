use super::DataStore;
use crate::domains::Dataset;
use crate::error::{Result, RosterError};
use std::fs;
use std::path::{Path, PathBuf};

/// Stores the whole dataset in a single JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(RosterError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Dataset> {
        if !self.path.exists() {
            return Err(RosterError::Store(format!(
                "No data file at {}. Run `roster init` to create one.",
                self.path.display()
            )));
        }
        let content = fs::read_to_string(&self.path).map_err(RosterError::Io)?;
        let data: Dataset = serde_json::from_str(&content)?;
        data.validate()?;
        log::debug!(
            "loaded {}: {} members, {} events, {} announcements, {} gallery items",
            self.path.display(),
            data.members.len(),
            data.events.len(),
            data.announcements.len(),
            data.gallery.len()
        );
        Ok(data)
    }

    fn save(&mut self, data: &Dataset) -> Result<()> {
        data.validate()?;
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, content).map_err(RosterError::Io)?;
        log::debug!("saved {}", self.path.display());
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}
