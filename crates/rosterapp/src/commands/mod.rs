//! # Command Layer
//!
//! Each user-facing operation lives in its own submodule as a plain function
//! over a [`DataStore`](crate::store::DataStore) and domain types.
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Build a [`PredicateSet`](crate::attributes::PredicateSet) from user input
//!   and run it through the filter engine
//! - Apply mutations by producing a new dataset and saving it
//! - Return a structured [`CmdResult`] with records, sections and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal output**: No stdout, colors or table layout
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//! - **Side effects outside the store**: `export` returns the CSV text and a file
//!   name; `contact` returns a link. The caller decides what to do with them.
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemoryStore` and the `StoreFixture` builder, and check
//! the `CmdResult` contents and error conditions.
//!
//! ## Command Modules
//!
//! - [`list`]: Search, filter, tab and section a collection
//! - [`options`]: Filter dropdown values for a collection
//! - [`view`]: Show one record (counts a gallery view)
//! - [`read`]: Mark an announcement read
//! - [`export`]: CSV of the filtered collection
//! - [`contact`]: `mailto:` and `tel:` links for a member
//! - [`add`]: Add a member
//! - [`init`]: Seed the data file with sample data
//! - [`config`]: Show effective configuration
//! - [`helpers`]: Shared query building

use serde::Serialize;

use crate::config::RosterConfig;
use crate::domains::Domain;
use crate::error::FilterWarning;
use crate::index::FieldOptions;
use crate::model::Record;

pub mod add;
pub mod config;
pub mod contact;
pub mod export;
pub mod helpers;
pub mod init;
pub mod list;
pub mod options;
pub mod read;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A titled group of records (one tab or partition bucket).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub name: String,
    pub records: Vec<Record>,
}

/// CSV text ready to be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportFile {
    pub filename: String,
    pub contents: String,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listed: Vec<Record>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOptions>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub affected: Vec<Record>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<RosterConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<FilterWarning>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn for_domain(domain: Domain) -> Self {
        Self {
            domain: Some(domain),
            ..Default::default()
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, records: Vec<Record>) -> Self {
        self.listed = records;
        self
    }

    pub fn with_affected(mut self, records: Vec<Record>) -> Self {
        self.affected = records;
        self
    }

    pub fn with_config(mut self, config: RosterConfig) -> Self {
        self.config = Some(config);
        self
    }
}
