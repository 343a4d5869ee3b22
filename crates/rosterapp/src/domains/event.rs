use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::attributes::{FieldKind, FieldSpec, Schema};
use crate::model::{Entity, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl EventStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: String,
    pub venue: String,
    pub organizer: String,
    pub category: String,
    pub status: EventStatus,
    pub attendees: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

pub const CATEGORIES: &[&str] = &[
    "Community Service",
    "Professional Development",
    "Environmental",
    "Youth Development",
    "Cultural",
    "Fundraising",
];

pub const STATUSES: &[&str] = &["upcoming", "ongoing", "completed"];

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("title", "Title", FieldKind::Text)
        .searchable()
        .exported(),
    FieldSpec::new("description", "Description", FieldKind::Text).searchable(),
    FieldSpec::new("date", "Date", FieldKind::Text).exported(),
    FieldSpec::new("time", "Time", FieldKind::Text).exported(),
    FieldSpec::new("venue", "Venue", FieldKind::Text).exported(),
    FieldSpec::new("organizer", "Organizer", FieldKind::Text).exported(),
    FieldSpec::new("category", "Category", FieldKind::Text)
        .filterable()
        .exported()
        .choices(CATEGORIES),
    FieldSpec::new("status", "Status", FieldKind::Text)
        .filterable()
        .partitionable()
        .exported()
        .choices(STATUSES),
    FieldSpec::new("attendees", "Attendees", FieldKind::Number).exported(),
    FieldSpec::new("max_attendees", "Max Attendees", FieldKind::Number).exported(),
    FieldSpec::new("image", "Image", FieldKind::Text),
];

pub const SCHEMA: Schema = Schema::new("events", FIELDS);

impl Entity for Event {
    fn id(&self) -> &str {
        &self.id
    }

    fn to_record(&self) -> Record {
        Record::new(self.id.clone())
            .with("title", self.title.as_str())
            .with("description", self.description.as_str())
            .with("date", self.date.format("%Y-%m-%d").to_string())
            .with("time", self.time.as_str())
            .with("venue", self.venue.as_str())
            .with("organizer", self.organizer.as_str())
            .with("category", self.category.as_str())
            .with("status", self.status.as_str())
            .with("attendees", self.attendees)
            .with_opt("max_attendees", self.max_attendees)
            .with_opt("image", self.image.clone())
    }
}
