use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::iso_timestamp;
use crate::attributes::{FieldKind, FieldSpec, Schema};
use crate::model::{Entity, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub publish_date: DateTime<Utc>,
    pub category: String,
    pub priority: Priority,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,
}

/// Dropdown order, most pressing first.
pub const PRIORITIES: &[&str] = &["urgent", "high", "medium", "low"];

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("title", "Title", FieldKind::Text)
        .searchable()
        .exported(),
    FieldSpec::new("content", "Content", FieldKind::Text).searchable(),
    FieldSpec::new("author", "Author", FieldKind::Text).exported(),
    FieldSpec::new("publish_date", "Published", FieldKind::Text).exported(),
    FieldSpec::new("category", "Category", FieldKind::Text)
        .filterable()
        .exported(),
    FieldSpec::new("priority", "Priority", FieldKind::Text)
        .filterable()
        .exported()
        .choices(PRIORITIES),
    FieldSpec::new("is_pinned", "Pinned", FieldKind::Bool).partitionable(),
    FieldSpec::new("is_read", "Read", FieldKind::Bool).partitionable(),
    FieldSpec::new("tags", "Tags", FieldKind::List)
        .searchable()
        .exported(),
    FieldSpec::new("attachments", "Attachments", FieldKind::List),
];

pub const SCHEMA: Schema = Schema::new("announcements", FIELDS);

impl Entity for Announcement {
    fn id(&self) -> &str {
        &self.id
    }

    fn to_record(&self) -> Record {
        Record::new(self.id.clone())
            .with("title", self.title.as_str())
            .with("content", self.content.as_str())
            .with("author", self.author.as_str())
            .with("publish_date", iso_timestamp(&self.publish_date))
            .with("category", self.category.as_str())
            .with("priority", self.priority.as_str())
            .with("is_pinned", self.is_pinned)
            .with("is_read", self.is_read)
            .with("tags", self.tags.clone())
            .with("attachments", self.attachments.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Value;

    #[test]
    fn test_flags_default_to_false() {
        let json = r#"{
            "id": "9", "title": "T", "content": "C", "author": "A",
            "publishDate": "2024-01-10T08:00:00Z", "category": "Membership",
            "priority": "low"
        }"#;
        let a: Announcement = serde_json::from_str(json).unwrap();
        assert!(!a.is_pinned);
        assert!(!a.is_read);

        let record = a.to_record();
        assert_eq!(record.get_attr("is_pinned"), Some(&Value::Bool(false)));
        assert_eq!(record.get_attr("priority"), Some(&Value::from("low")));
        assert_eq!(
            record.get_attr("publish_date"),
            Some(&Value::from("2024-01-10T08:00:00.000Z"))
        );
    }
}
