use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::iso_timestamp;
use crate::attributes::{FieldKind, FieldSpec, Schema};
use crate::model::{Entity, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub upload_date: DateTime<Utc>,
    pub event: String,
    pub year: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photographer: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub views: u32,
}

pub const MEDIA_TYPES: &[&str] = &["image", "video"];

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("title", "Title", FieldKind::Text)
        .searchable()
        .exported(),
    FieldSpec::new("description", "Description", FieldKind::Text).searchable(),
    FieldSpec::new("type", "Type", FieldKind::Text)
        .filterable()
        .partitionable()
        .exported()
        .choices(MEDIA_TYPES),
    FieldSpec::new("url", "URL", FieldKind::Text).exported(),
    FieldSpec::new("thumbnail", "Thumbnail", FieldKind::Text),
    FieldSpec::new("upload_date", "Uploaded", FieldKind::Text).exported(),
    FieldSpec::new("event", "Event", FieldKind::Text)
        .filterable()
        .exported(),
    FieldSpec::new("year", "Year", FieldKind::Number)
        .filterable()
        .newest_first()
        .exported(),
    FieldSpec::new("photographer", "Photographer", FieldKind::Text).exported(),
    FieldSpec::new("tags", "Tags", FieldKind::List).searchable(),
    FieldSpec::new("views", "Views", FieldKind::Number).exported(),
];

pub const SCHEMA: Schema = Schema::new("gallery", FIELDS);

impl Entity for GalleryItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn to_record(&self) -> Record {
        Record::new(self.id.clone())
            .with("title", self.title.as_str())
            .with("description", self.description.as_str())
            .with("type", self.media_type.as_str())
            .with("url", self.url.as_str())
            .with_opt("thumbnail", self.thumbnail.clone())
            .with("upload_date", iso_timestamp(&self.upload_date))
            .with("event", self.event.as_str())
            .with("year", self.year)
            .with_opt("photographer", self.photographer.clone())
            .with("tags", self.tags.clone())
            .with("views", self.views)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Value;

    #[test]
    fn test_type_field_is_renamed() {
        let json = r#"{
            "id": "5", "title": "District Conference Opening", "description": "Opening",
            "type": "video", "url": "https://example.com/v.mp4",
            "uploadDate": "2023-11-10T08:00:00Z", "event": "District Conference",
            "year": 2023, "tags": ["conference"], "views": 445
        }"#;
        let item: GalleryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.media_type, MediaType::Video);

        let record = item.to_record();
        assert_eq!(record.get_attr("type"), Some(&Value::from("video")));
        assert_eq!(record.get_attr("views"), Some(&Value::Number(445)));

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["type"], "video");
    }
}
