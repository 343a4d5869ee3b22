use super::DataStore;
use crate::domains::Dataset;
use crate::error::Result;

/// Keeps the dataset in memory. Starts out empty (not yet initialised).
#[derive(Debug, Default)]
pub struct InMemoryStore {
    data: Option<Dataset>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: Dataset) -> Self {
        Self { data: Some(data) }
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Dataset> {
        Ok(self.data.clone().unwrap_or_default())
    }

    fn save(&mut self, data: &Dataset) -> Result<()> {
        data.validate()?;
        self.data = Some(data.clone());
        Ok(())
    }

    fn exists(&self) -> bool {
        self.data.is_some()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::domains::{Announcement, GalleryItem, MediaType, Member, Priority};
    use chrono::{TimeZone, Utc};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::with_data(Dataset::default()),
            }
        }

        pub fn with_sample(self) -> Self {
            Self {
                store: InMemoryStore::with_data(Dataset::sample().unwrap()),
            }
        }

        fn update(mut self, f: impl FnOnce(&mut Dataset)) -> Self {
            let mut data = self.store.load().unwrap();
            f(&mut data);
            self.store.save(&data).unwrap();
            self
        }

        pub fn with_member(self, id: &str, name: &str, club: &str, role: &str, year: i64) -> Self {
            let member = Member {
                id: id.to_string(),
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
                phone: "+91 90000 00000".to_string(),
                club: club.to_string(),
                role: role.to_string(),
                position: None,
                year,
                avatar: None,
                location: "Coimbatore, India".to_string(),
                join_date: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
                bio: None,
                interests: Vec::new(),
            };
            self.update(|d| d.members.push(member))
        }

        pub fn with_announcement(self, id: &str, title: &str, pinned: bool, read: bool) -> Self {
            let announcement = Announcement {
                id: id.to_string(),
                title: title.to_string(),
                content: format!("Details for {}", title),
                author: "District Secretary".to_string(),
                publish_date: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
                category: "Membership".to_string(),
                priority: Priority::Medium,
                is_pinned: pinned,
                is_read: read,
                tags: Vec::new(),
                attachments: Vec::new(),
            };
            self.update(|d| d.announcements.push(announcement))
        }

        pub fn with_gallery_item(self, id: &str, title: &str, media: MediaType, year: i64) -> Self {
            let item = GalleryItem {
                id: id.to_string(),
                title: title.to_string(),
                description: String::new(),
                media_type: media,
                url: format!("https://example.com/{}", id),
                thumbnail: None,
                upload_date: Utc.with_ymd_and_hms(year as i32, 6, 1, 12, 0, 0).unwrap(),
                event: "General".to_string(),
                year,
                photographer: None,
                tags: Vec::new(),
                views: 0,
            };
            self.update(|d| d.gallery.push(item))
        }
    }
}
