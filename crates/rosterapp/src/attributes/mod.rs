//! # Field System
//!
//! Every collection the site shows (members, events, announcements, gallery
//! items) is filtered the same way: a free-text box over a few fields, a row of
//! "All X" dropdowns, and tabs. Instead of four hand-written filters, each
//! domain declares its fields once and the generic machinery does the rest:
//!
//! - **Values**: the primitive shapes a field can hold ([`Value`])
//! - **Specifications**: per-field kind and capabilities ([`FieldSpec`], [`Schema`])
//! - **Predicates**: the current search/selection state ([`PredicateSet`])
//!
//! ## Field Kinds
//!
//! | Kind | Examples | Empty value |
//! |------|----------|-------------|
//! | `Text` | `club`, `status`, `category` | `""` |
//! | `Number` | `year`, `views` | `0` |
//! | `Bool` | `is_pinned`, `is_read` | `false` |
//! | `List` | `tags`, `interests` | `[]` |
//!
//! ## Capabilities
//!
//! | Flag | Meaning |
//! |------|---------|
//! | `searchable` | Included in the case-insensitive free-text search |
//! | `filterable` | Gets an equality dropdown populated by [`crate::index::FieldIndex`] |
//! | `partitionable` | May be used as a tab/bucket discriminator |
//!
//! ## Usage
//!
//! ```ignore
//! let mut predicates = PredicateSet::new(&member::SCHEMA);
//! predicates.set_search("lead");
//! predicates.select_raw("year", "2023")?;
//! if predicates.matches(&record, &member::SCHEMA, &mut warnings) { ... }
//! ```

mod filter;
mod spec;
mod value;

pub use filter::{PredicateSet, Selection};
pub use spec::{FieldKind, FieldSpec, Schema};
pub use value::Value;
