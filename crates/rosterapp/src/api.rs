//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all roster operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., parsing a domain name, `field=value` filters)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or writing export files
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Time
//!
//! Operations that stamp or name things by date (`add`, `export`) take the
//! current time as an argument. The CLI passes the clock; tests pass a fixed
//! instant.
//!
//! ## Generic Over DataStore
//!
//! `RosterApi<S: DataStore>` is generic over the storage backend:
//! - Production: `RosterApi<FileStore>`
//! - Testing: `RosterApi<InMemoryStore>`
//!
//! ## Testing Strategy
//!
//! API tests verify that each method reaches the right command with the right
//! arguments. Command logic is tested in the command modules.

use chrono::{DateTime, NaiveDate, Utc};

use crate::commands::{self, config::ConfigAction, helpers::Query, CmdResult};
use crate::config::RosterConfig;
use crate::domains::Domain;
use crate::error::{Result, RosterError};
use crate::store::DataStore;

pub use crate::commands::add::NewMember;

/// The main API facade for roster operations.
pub struct RosterApi<S: DataStore> {
    store: S,
    config: RosterConfig,
}

impl<S: DataStore> RosterApi<S> {
    pub fn new(store: S, config: RosterConfig) -> Self {
        Self { store, config }
    }

    pub fn list(&self, domain: Domain, query: &Query) -> Result<CmdResult> {
        commands::list::run(&self.store, domain, query)
    }

    pub fn options(&self, domain: Domain) -> Result<CmdResult> {
        commands::options::run(&self.store, domain)
    }

    pub fn view(&mut self, domain: Domain, id: &str) -> Result<CmdResult> {
        commands::view::run(&mut self.store, domain, id)
    }

    pub fn mark_read(&mut self, id: &str) -> Result<CmdResult> {
        commands::read::run(&mut self.store, id)
    }

    pub fn export(&self, domain: Domain, query: &Query, today: NaiveDate) -> Result<CmdResult> {
        commands::export::run(&self.store, domain, query, &self.config, today)
    }

    pub fn message(&self, id: &str, body: &str) -> Result<CmdResult> {
        commands::contact::message(&self.store, id, body, &self.config)
    }

    pub fn call(&self, id: &str) -> Result<CmdResult> {
        commands::contact::call(&self.store, id)
    }

    pub fn add_member(&mut self, member: NewMember, now: DateTime<Utc>) -> Result<CmdResult> {
        commands::add::run(&mut self.store, member, now)
    }

    pub fn init(&mut self) -> Result<CmdResult> {
        commands::init::run(&mut self.store)
    }

    pub fn config(&self, key: Option<&str>) -> Result<CmdResult> {
        let action = match key {
            Some(k) => ConfigAction::ShowKey(k.to_string()),
            None => ConfigAction::ShowAll,
        };
        commands::config::run(&self.config, action)
    }
}

/// Parse a domain name as typed by a user (`members`, `events`, ...).
pub fn parse_domain(raw: &str) -> Result<Domain> {
    raw.parse().map_err(RosterError::Api)
}

/// Build a [`Query`] from raw user input. Each filter must look like `field=value`.
pub fn build_query<F: AsRef<str>>(
    search: Option<&str>,
    filters: &[F],
    tab: Option<&str>,
) -> Result<Query> {
    let mut query = Query {
        search: search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        tab: tab.map(str::to_string),
        ..Default::default()
    };
    for raw in filters {
        query.filters.push(Query::parse_filter(raw.as_ref())?);
    }
    Ok(query)
}
