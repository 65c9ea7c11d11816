//! Bookmark and recently-viewed state.
//!
//! Both structures persist through the key-value store as JSON under fixed
//! keys, the same way the UI shell keeps them in localStorage.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::store::{KeyValueStore, StoreError};

/// Store key for the bookmark list
pub const BOOKMARKS_KEY: &str = "campus.bookmarks";

/// Store key for the recently-viewed list
pub const RECENTLY_VIEWED_KEY: &str = "campus.recently-viewed";

/// Maximum entries kept in the recently-viewed list
pub const RECENTLY_VIEWED_CAP: usize = 10;

/// Ordered set of bookmarked course IDs
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct BookmarkList {
    ids: Vec<String>,
}

impl BookmarkList {
    /// Create an empty bookmark list
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a course is bookmarked
    pub fn contains(&self, course_id: &str) -> bool {
        self.ids.iter().any(|id| id == course_id)
    }

    /// Toggle a bookmark; returns the new membership state
    pub fn toggle(&mut self, course_id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|id| id == course_id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(course_id.to_string());
            true
        }
    }

    /// Bookmarked IDs in insertion order
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Number of bookmarks
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Load from the store, defaulting to empty when nothing is saved
    pub fn load(store: &dyn KeyValueStore) -> Result<Self, StoreError> {
        match store.get(BOOKMARKS_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Self::default()),
        }
    }

    /// Save to the store
    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), StoreError> {
        store.set(BOOKMARKS_KEY, serde_json::to_string(self)?)
    }
}

/// One recently-viewed entry
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RecentEntry {
    pub course_id: String,
    pub viewed_at: String, // ISO 8601
}

/// Most-recent-first list of viewed courses, capped at
/// [`RECENTLY_VIEWED_CAP`] entries
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RecentlyViewed {
    entries: Vec<RecentEntry>,
}

impl RecentlyViewed {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a view; re-viewing moves the entry to the front and refreshes
    /// its timestamp
    pub fn record(&mut self, course_id: &str) {
        self.record_at(course_id, Utc::now().to_rfc3339());
    }

    /// Record a view with an explicit timestamp
    pub fn record_at(&mut self, course_id: &str, viewed_at: String) {
        self.entries.retain(|e| e.course_id != course_id);
        self.entries.insert(
            0,
            RecentEntry {
                course_id: course_id.to_string(),
                viewed_at,
            },
        );
        self.entries.truncate(RECENTLY_VIEWED_CAP);
    }

    /// Entries, most recent first
    pub fn entries(&self) -> &[RecentEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load from the store, defaulting to empty when nothing is saved
    pub fn load(store: &dyn KeyValueStore) -> Result<Self, StoreError> {
        match store.get(RECENTLY_VIEWED_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Self::default()),
        }
    }

    /// Save to the store
    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), StoreError> {
        store.set(RECENTLY_VIEWED_KEY, serde_json::to_string(self)?)
    }
}
