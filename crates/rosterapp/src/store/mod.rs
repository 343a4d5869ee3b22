//! # Storage Layer
//!
//! The filter engine works on owned collections handed to it; where those
//! collections live is this module's concern. The [`DataStore`] trait lets the
//! command layer load a [`Dataset`], derive a new one, and save it back without
//! knowing the backend.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one pretty-printed JSON file holding all collections.
//! - [`memory::InMemoryStore`]: for testing commands without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! roster.json
//! {
//!   "members":       [ { "id": "1", "name": ..., "joinDate": ... }, ... ],
//!   "events":        [ ... ],
//!   "announcements": [ ... ],
//!   "gallery":       [ ... ]
//! }
//! ```
//!
//! Every load is validated: duplicate ids within a collection are a
//! [`crate::error::RosterError::Store`] error, never silently merged.

use crate::domains::Dataset;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for dataset storage.
pub trait DataStore {
    /// Load every collection.
    fn load(&self) -> Result<Dataset>;

    /// Replace the stored collections.
    fn save(&mut self, data: &Dataset) -> Result<()>;

    /// Whether anything has been stored yet.
    fn exists(&self) -> bool;
}
