//! # CLI Behavior
//!
//! Running `roster` with no arguments lists members.
//!
//! ## Lists
//!
//! `roster list <domain>` prints one line per record. Events, announcements and
//! gallery items are grouped into sections (by status, pinned first, by media
//! type). With `--tab` the listing shows only that tab and is not sectioned.
//!
//! Filters are `field=value` pairs. The value `all` clears a filter, like picking
//! "All" in a dropdown. `roster options <domain>` shows what each filter accepts.
//!
//! ## Side Effects
//!
//! - `view gallery <id>` counts a view.
//! - `read <id>` marks an announcement read.
//! - `export` writes `<prefix>-<domain>-<date>.csv` into the current directory
//!   (or `--output`) and prints its path.
//! - `contact` never sends anything; it prints a `mailto:` or `tel:` link.
//!
//! Every command accepts `--json` and prints the full result instead.

mod commands;
mod render;
mod setup;

pub use commands::run;
