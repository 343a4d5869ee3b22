//! # Roster Architecture
//!
//! Roster is a **UI-agnostic library** for browsing a membership organization's
//! records: members, events, announcements and gallery items. A CLI ships with
//! it, but every operation is available without a terminal.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (roster crate)                                   │
//! │  - Parses arguments, formats output, writes export files    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (domain names, field=value filters)    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list, options, view, read, export, contact, add, init    │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!          │                                      │
//!          ▼                                      ▼
//! ┌──────────────────────────────┐  ┌──────────────────────────┐
//! │  Filtering Core              │  │  Storage Layer (store/)  │
//! │  attributes, engine, index,  │  │  DataStore trait         │
//! │  partition                   │  │  FileStore, InMemoryStore│
//! └──────────────────────────────┘  └──────────────────────────┘
//! ```
//!
//! ## The Filtering Core
//!
//! Every domain type flattens into a [`model::Record`]: an id plus named
//! [`attributes::Value`]s. A domain's [`attributes::Schema`] says which fields
//! exist, their kinds, and which are searchable, filterable, partitionable or
//! exported. On top of that:
//!
//! - [`attributes::PredicateSet`]: one search term plus one selection per
//!   filterable field. `All` means "no constraint".
//! - [`engine::FilterEngine`]: keeps the records matching every predicate, in
//!   input order.
//! - [`index::FieldIndex`]: the distinct values offered in each filter dropdown.
//! - [`partition`]: splits a filtered listing into tabs or sections by one field.
//!
//! The core is pure. It never mutates records, and bad data (a value of the
//! wrong kind, a field the schema no longer declares) surfaces as
//! [`error::FilterWarning`]s rather than panics.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns
//! `Result<CmdResult>`, and never writes to stdout or reads the clock. The
//! caller passes "now" where a command needs it.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`attributes`]: Values, field specs, schemas and predicates
//! - [`engine`]: Applies predicates to a collection
//! - [`index`]: Distinct filter values
//! - [`partition`]: Tabs and sections
//! - [`model`]: `Record` and the `Entity` trait
//! - [`domains`]: The four record types, their schemas and the `Dataset`
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Layered configuration
//! - [`error`]: Error and warning types

pub mod api;
pub mod attributes;
pub mod commands;
pub mod config;
pub mod domains;
pub mod engine;
pub mod error;
pub mod index;
pub mod model;
pub mod partition;
pub mod store;
