use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::defaults::DEFAULT_READ_TIME;

/// Store-assigned post identifier.
///
/// json-server hands out numeric ids in older releases and short string ids
/// in newer ones, so the id is kept opaque and compared as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for PostId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Post entity - a single blog article as held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub categories: Vec<String>,
    pub description: String,
    pub published_at: DateTime<Utc>,
    pub cover_image: String,
    /// HTML body.
    pub content: String,
    pub read_time: Option<String>,
}

impl Post {
    /// First category, shown as the list badge and in the stats grid.
    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }

    pub fn secondary_category(&self) -> Option<&str> {
        self.categories.get(1).map(String::as_str)
    }

    /// Read-time label, falling back to the default when the store has none
    /// or an empty one.
    pub fn read_time_label(&self) -> &str {
        self.read_time
            .as_deref()
            .filter(|label| !label.trim().is_empty())
            .unwrap_or(DEFAULT_READ_TIME)
    }
}

/// A normalized post ready to be written; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub categories: Vec<String>,
    pub description: String,
    pub published_at: DateTime<Utc>,
    pub cover_image: String,
    pub content: String,
    pub read_time: String,
}

impl PostDraft {
    /// Attach the id the store assigned.
    pub fn into_post(self, id: PostId) -> Post {
        Post {
            id,
            title: self.title,
            categories: self.categories,
            description: self.description,
            published_at: self.published_at,
            cover_image: self.cover_image,
            content: self.content,
            read_time: Some(self.read_time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn post(read_time: Option<&str>, categories: &[&str]) -> Post {
        Post {
            id: PostId::from(1),
            title: "Understanding GST".into(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            description: "A primer".into(),
            published_at: Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap(),
            cover_image: "https://example.com/cover.png".into(),
            content: "<p>Body</p>".into(),
            read_time: read_time.map(str::to_string),
        }
    }

    #[test]
    fn numeric_and_string_ids_compare_as_text() {
        assert_eq!(PostId::from(7), PostId::from("7"));
        assert_ne!(PostId::from(7), PostId::from("07"));
    }

    #[test]
    fn read_time_falls_back_when_missing_or_blank() {
        assert_eq!(post(None, &["Tax"]).read_time_label(), DEFAULT_READ_TIME);
        assert_eq!(post(Some("  "), &["Tax"]).read_time_label(), DEFAULT_READ_TIME);
        assert_eq!(post(Some("8 Mins"), &["Tax"]).read_time_label(), "8 Mins");
    }

    #[test]
    fn category_accessors_tolerate_short_lists() {
        let empty = post(None, &[]);
        assert_eq!(empty.primary_category(), None);
        assert_eq!(empty.secondary_category(), None);

        let two = post(None, &["Finance", "Tax"]);
        assert_eq!(two.primary_category(), Some("Finance"));
        assert_eq!(two.secondary_category(), Some("Tax"));
    }
}
