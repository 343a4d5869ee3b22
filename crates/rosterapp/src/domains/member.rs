use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::iso_timestamp;
use crate::attributes::{FieldKind, FieldSpec, Schema};
use crate::model::{Entity, Record};

/// A directory entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub club: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub year: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub location: String,
    pub join_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interests: Vec<String>,
}

// Exported fields are declared in CSV column order.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Name", FieldKind::Text)
        .searchable()
        .exported(),
    FieldSpec::new("email", "Email", FieldKind::Text).exported(),
    FieldSpec::new("phone", "Phone", FieldKind::Text).exported(),
    FieldSpec::new("club", "Club", FieldKind::Text)
        .searchable()
        .filterable()
        .exported(),
    FieldSpec::new("role", "Role", FieldKind::Text)
        .filterable()
        .exported(),
    FieldSpec::new("position", "Position", FieldKind::Text)
        .searchable()
        .exported(),
    FieldSpec::new("location", "Location", FieldKind::Text).exported(),
    FieldSpec::new("join_date", "Join Date", FieldKind::Text).exported(),
    FieldSpec::new("year", "Year", FieldKind::Number).filterable(),
    FieldSpec::new("bio", "Bio", FieldKind::Text).searchable(),
    FieldSpec::new("interests", "Interests", FieldKind::List),
    FieldSpec::new("avatar", "Avatar", FieldKind::Text),
];

pub const SCHEMA: Schema = Schema::new("members", FIELDS);

impl Entity for Member {
    fn id(&self) -> &str {
        &self.id
    }

    fn to_record(&self) -> Record {
        Record::new(self.id.clone())
            .with("name", self.name.as_str())
            .with("email", self.email.as_str())
            .with("phone", self.phone.as_str())
            .with("club", self.club.as_str())
            .with("role", self.role.as_str())
            .with_opt("position", self.position.clone())
            .with("location", self.location.as_str())
            .with("join_date", iso_timestamp(&self.join_date))
            .with("year", self.year)
            .with_opt("bio", self.bio.clone())
            .with("interests", self.interests.clone())
            .with_opt("avatar", self.avatar.clone())
    }
}
