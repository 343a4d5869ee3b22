//! # Configuration
//!
//! Roster configuration is loaded with [`confique`] from layered sources.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `ROSTER_ORGANIZATION`, `ROSTER_EXPORT_PREFIX`, `ROSTER_DATA_FILE`.
//! 2. **Config file**: `roster.toml` in the OS-appropriate config directory (via
//!    `directories`), or the file passed with `--config`. A missing file is not an error.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `organization` | `Rotaract District 3206` | Used in the subject of contact emails |
//! | `export_prefix` | `rotaract` | First part of CSV export file names |
//! | `data_file` | `<data dir>/roster.json` | Where the collections are stored |

use confique::Config;
use directories::ProjectDirs;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{Result, RosterError};

pub const CONFIG_FILE: &str = "roster.toml";
pub const DATA_FILE: &str = "roster.json";
pub const DEFAULT_ORGANIZATION: &str = "Rotaract District 3206";
pub const DEFAULT_EXPORT_PREFIX: &str = "rotaract";

#[derive(Config, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Organization name shown in outgoing messages
    #[config(env = "ROSTER_ORGANIZATION", default = "Rotaract District 3206")]
    pub organization: String,

    /// Prefix for exported CSV file names
    #[config(env = "ROSTER_EXPORT_PREFIX", default = "rotaract")]
    pub export_prefix: String,

    /// Path of the JSON data file. When absent, the platform data directory is used.
    #[config(env = "ROSTER_DATA_FILE")]
    pub data_file: Option<PathBuf>,
}

// Must agree with the `#[config(default = ...)]` literals above.
impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            organization: DEFAULT_ORGANIZATION.to_string(),
            export_prefix: DEFAULT_EXPORT_PREFIX.to_string(),
            data_file: None,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "roster", "roster")
}

impl RosterConfig {
    /// Default location of `roster.toml`.
    pub fn default_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load from the environment, then `path` (or the default config file).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = path.map(Path::to_path_buf).or_else(Self::default_path);
        let mut builder = Self::builder().env();
        if let Some(file) = &file {
            log::debug!("reading config from {}", file.display());
            builder = builder.file(file);
        }
        Ok(builder.load()?)
    }

    /// Resolved data file location.
    pub fn data_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.data_file {
            return Ok(path.clone());
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().join(DATA_FILE))
            .ok_or_else(|| {
                RosterError::Store("Could not determine a data directory; set data_file".into())
            })
    }

    /// Look up a single setting by key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "organization" => Some(self.organization.clone()),
            "export_prefix" => Some(self.export_prefix.clone()),
            "data_file" => Some(
                self.data_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert_eq!(config.organization, "Rotaract District 3206");
        assert_eq!(config.export_prefix, "rotaract");
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_default_matches_declared_defaults() {
        // No env or file layer: only the `#[config(default = ...)]` values apply.
        let declared = RosterConfig::builder().load().unwrap();
        assert_eq!(declared, RosterConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "export_prefix = \"district\"\ndata_file = \"/tmp/roster-test.json\"\n",
        )
        .unwrap();

        let config = RosterConfig::load(Some(&path)).unwrap();
        assert_eq!(config.export_prefix, "district");
        assert_eq!(
            config.data_path().unwrap(),
            PathBuf::from("/tmp/roster-test.json")
        );
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = RosterConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.export_prefix, "rotaract");
    }

    #[test]
    fn test_get_by_key() {
        let config = RosterConfig::default();
        assert_eq!(config.get("export_prefix").as_deref(), Some("rotaract"));
        assert_eq!(config.get("data_file").as_deref(), Some(""));
        assert!(config.get("file_ext").is_none());
    }
}
