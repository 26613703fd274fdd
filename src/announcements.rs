//! Session-local announcement board. Nothing here touches the backend:
//! announcements live for the duration of the interactive session and are
//! gone when the process exits.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::ValidationError;

#[derive(Debug, Clone)]
pub struct Announcement {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub author: String,
    pub posted_at: DateTime<Utc>,
}

/// In-memory store, newest first.
#[derive(Debug, Default)]
pub struct AnnouncementBoard {
    items: Vec<Announcement>,
}

impl AnnouncementBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post an announcement. Ids are assigned client-side; there is no
    /// server counterpart to hand them out.
    pub fn post(
        &mut self,
        title: &str,
        body: &str,
        author: &str,
    ) -> Result<&Announcement, ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::Required { field: "title" });
        }
        let announcement = Announcement {
            id: Uuid::new_v4(),
            title: title.trim().to_string(),
            body: body.trim().to_string(),
            author: author.to_string(),
            posted_at: Utc::now(),
        };
        self.items.insert(0, announcement);
        Ok(&self.items[0])
    }

    /// Announcements, newest first.
    pub fn list(&self) -> &[Announcement] {
        &self.items
    }

    /// Remove an announcement. Returns false when the id is unknown.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|a| a.id != id);
        self.items.len() < before
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
