//! # Domains
//!
//! The four collections the site lists. Each submodule holds the serde type
//! (camelCase JSON, the same shape as the site's data), its [`Schema`] and its
//! [`Entity`] impl. This module ties them together:
//!
//! - [`Domain`] names a collection and carries its page layout: how filtered
//!   results are sectioned ([`Layout`]) and which tabs the page offers.
//! - [`Dataset`] owns all four collections. Mutations (adding a member,
//!   marking an announcement read, counting a gallery view) consume the dataset
//!   and return a new one; nothing edits records in place.
//!
//! | Domain | Sections | Tabs |
//! |--------|----------|------|
//! | members | none | all |
//! | events | by status: upcoming, ongoing, completed | upcoming, ongoing, completed |
//! | announcements | pinned / unpinned | pinned, unread, all |
//! | gallery | by type: image, video | all, images, videos |

pub mod announcement;
pub mod event;
pub mod gallery;
pub mod member;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::attributes::{Schema, Value};
use crate::error::{Result, RosterError};
use crate::model::{Entity, Record};
use crate::partition::{partition, partition_by, TabRule, TabSpec, ViewPartition};

pub use announcement::{Announcement, Priority};
pub use event::{Event, EventStatus};
pub use gallery::{GalleryItem, MediaType};
pub use member::Member;

const SAMPLE: &str = include_str!("../../data/sample.json");

/// Timestamps in records and exports look like `2021-03-15T00:00:00.000Z`.
pub(crate) fn iso_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Members,
    Events,
    Announcements,
    Gallery,
}

/// How a page sections its filtered results.
#[derive(Debug, Clone, Copy)]
pub enum Layout {
    Flat,
    ByField {
        field: &'static str,
        order: &'static [&'static str],
    },
    ByFlag {
        field: &'static str,
        labels: (&'static str, &'static str),
    },
}

impl Layout {
    /// Section `records`, or `None` for a flat layout.
    pub fn partition<'r, I>(&self, records: I, schema: &Schema) -> Option<ViewPartition<'r>>
    where
        I: IntoIterator<Item = &'r Record>,
    {
        match *self {
            Layout::Flat => None,
            Layout::ByField { field, order } => {
                let order: Vec<Value> = order.iter().map(|v| Value::from(*v)).collect();
                Some(partition(records, schema, field, &order))
            }
            Layout::ByFlag { field, labels } => {
                let rule = TabRule::Flag { field, value: true };
                Some(partition_by(records, field, labels, |r| rule.matches(r)))
            }
        }
    }
}

const MEMBER_TABS: &[TabSpec] = &[TabSpec::new("all", "All Members", TabRule::All)];

const EVENT_TABS: &[TabSpec] = &[
    TabSpec::new(
        "upcoming",
        "Upcoming",
        TabRule::Equals {
            field: "status",
            value: "upcoming",
        },
    ),
    TabSpec::new(
        "ongoing",
        "Ongoing",
        TabRule::Equals {
            field: "status",
            value: "ongoing",
        },
    ),
    TabSpec::new(
        "completed",
        "Completed",
        TabRule::Equals {
            field: "status",
            value: "completed",
        },
    ),
];

const ANNOUNCEMENT_TABS: &[TabSpec] = &[
    TabSpec::new(
        "pinned",
        "Pinned",
        TabRule::Flag {
            field: "is_pinned",
            value: true,
        },
    ),
    TabSpec::new(
        "unread",
        "Unread",
        TabRule::Flag {
            field: "is_read",
            value: false,
        },
    ),
    TabSpec::new("all", "All", TabRule::All),
];

const GALLERY_TABS: &[TabSpec] = &[
    TabSpec::new("all", "All Media", TabRule::All),
    TabSpec::new(
        "images",
        "Images",
        TabRule::Equals {
            field: "type",
            value: "image",
        },
    ),
    TabSpec::new(
        "videos",
        "Videos",
        TabRule::Equals {
            field: "type",
            value: "video",
        },
    ),
];

impl Domain {
    pub const ALL: [Domain; 4] = [
        Domain::Members,
        Domain::Events,
        Domain::Announcements,
        Domain::Gallery,
    ];

    pub fn name(self) -> &'static str {
        self.schema().domain
    }

    /// Plural noun for messages ("Exported 3 members").
    pub fn noun(self) -> &'static str {
        match self {
            Domain::Gallery => "gallery items",
            other => other.name(),
        }
    }

    pub fn schema(self) -> &'static Schema {
        match self {
            Domain::Members => &member::SCHEMA,
            Domain::Events => &event::SCHEMA,
            Domain::Announcements => &announcement::SCHEMA,
            Domain::Gallery => &gallery::SCHEMA,
        }
    }

    pub fn layout(self) -> Layout {
        match self {
            Domain::Members => Layout::Flat,
            Domain::Events => Layout::ByField {
                field: "status",
                order: event::STATUSES,
            },
            Domain::Announcements => Layout::ByFlag {
                field: "is_pinned",
                labels: ("pinned", "unpinned"),
            },
            Domain::Gallery => Layout::ByField {
                field: "type",
                order: gallery::MEDIA_TYPES,
            },
        }
    }

    pub fn tabs(self) -> &'static [TabSpec] {
        match self {
            Domain::Members => MEMBER_TABS,
            Domain::Events => EVENT_TABS,
            Domain::Announcements => ANNOUNCEMENT_TABS,
            Domain::Gallery => GALLERY_TABS,
        }
    }

    pub fn tab(self, name: &str) -> Result<&'static TabSpec> {
        self.tabs()
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| RosterError::UnknownTab {
                domain: self.name().to_string(),
                tab: name.to_string(),
            })
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "members" | "member" => Ok(Domain::Members),
            "events" | "event" => Ok(Domain::Events),
            "announcements" | "announcement" | "news" => Ok(Domain::Announcements),
            "gallery" | "media" => Ok(Domain::Gallery),
            other => Err(format!(
                "unknown collection '{}' (expected members, events, announcements or gallery)",
                other
            )),
        }
    }
}

/// Every collection, as stored in the data file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub announcements: Vec<Announcement>,
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
}

fn to_records<E: Entity>(items: &[E]) -> Vec<Record> {
    items.iter().map(Entity::to_record).collect()
}

fn check_unique<E: Entity>(domain: Domain, items: &[E]) -> Result<()> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id()) {
            return Err(RosterError::Store(format!(
                "Duplicate {} id '{}'",
                domain,
                item.id()
            )));
        }
    }
    Ok(())
}

impl Dataset {
    /// The built-in demo data.
    pub fn sample() -> Result<Self> {
        Ok(serde_json::from_str(SAMPLE)?)
    }

    pub fn records(&self, domain: Domain) -> Vec<Record> {
        match domain {
            Domain::Members => to_records(&self.members),
            Domain::Events => to_records(&self.events),
            Domain::Announcements => to_records(&self.announcements),
            Domain::Gallery => to_records(&self.gallery),
        }
    }

    pub fn len(&self, domain: Domain) -> usize {
        match domain {
            Domain::Members => self.members.len(),
            Domain::Events => self.events.len(),
            Domain::Announcements => self.announcements.len(),
            Domain::Gallery => self.gallery.len(),
        }
    }

    pub fn find_record(&self, domain: Domain, id: &str) -> Result<Record> {
        self.records(domain)
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found(domain, id))
    }

    /// Ids must be unique within each collection.
    pub fn validate(&self) -> Result<()> {
        check_unique(Domain::Members, &self.members)?;
        check_unique(Domain::Events, &self.events)?;
        check_unique(Domain::Announcements, &self.announcements)?;
        check_unique(Domain::Gallery, &self.gallery)
    }

    pub fn with_member(mut self, member: Member) -> Result<Self> {
        if self.members.iter().any(|m| m.id == member.id) {
            return Err(RosterError::Store(format!(
                "Duplicate members id '{}'",
                member.id
            )));
        }
        self.members.push(member);
        Ok(self)
    }

    pub fn with_announcement_read(mut self, id: &str) -> Result<Self> {
        let item = self
            .announcements
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| not_found(Domain::Announcements, id))?;
        item.is_read = true;
        Ok(self)
    }

    pub fn with_gallery_view(mut self, id: &str) -> Result<Self> {
        let item = self
            .gallery
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| not_found(Domain::Gallery, id))?;
        item.views = item.views.saturating_add(1);
        Ok(self)
    }
}

fn not_found(domain: Domain, id: &str) -> RosterError {
    RosterError::NotFound {
        domain: domain.name().to_string(),
        id: id.to_string(),
    }
}
