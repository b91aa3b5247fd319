use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::user::Author;

/// The category a notice is filed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A general announcement.
    General,
    /// An academic announcement.
    Academic,
    /// An event announcement.
    Event,
    /// An urgent announcement.
    Urgent,
}

/// The priority assigned to a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// High priority.
    High,
    /// Medium priority.
    Medium,
    /// Low priority.
    Low,
}

/// Represents a single announcement record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    /// The unique, monotonically increasing identifier of the notice.
    pub id: u64,
    /// The notice title.
    pub title: String,
    /// The notice body.
    pub content: String,
    /// The category the notice is filed under.
    pub category: Category,
    /// The priority of the notice.
    pub priority: Priority,
    /// The user that authored the notice.
    pub author: Author,
    /// The timestamp when the notice was created.
    pub created_at: DateTime<Utc>,
    /// The timestamp when the notice was last updated.
    pub updated_at: DateTime<Utc>,
    /// Optional expiry timestamp. Informational only: expired notices are
    /// neither removed nor hidden by the store.
    pub expires_at: Option<DateTime<Utc>>,
}

/// The form payload for creating or updating a notice.
///
/// Authorship and timestamps are never part of the payload; the store
/// stamps those itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoticeDraft {
    /// The notice title.
    pub title: String,
    /// The notice body.
    pub content: String,
    /// The category the notice is filed under.
    pub category: Category,
    /// The priority of the notice.
    pub priority: Priority,
    /// Optional expiry timestamp.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Criteria for deriving a filtered view of the notice collection.
#[derive(Clone, Debug, Default)]
pub struct NoticeFilter {
    /// Case-insensitive substring matched against title or content.
    /// Empty matches everything.
    pub search: String,
    /// When set, only notices in this category match.
    pub category: Option<Category>,
    /// When set, only notices with this priority match.
    pub priority: Option<Priority>,
}

impl NoticeFilter {
    /// Returns `true` if the given notice satisfies every criterion.
    pub fn matches(&self, notice: &Notice) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || notice.title.to_lowercase().contains(&needle)
            || notice.content.to_lowercase().contains(&needle);
        let matches_category = self.category.is_none_or(|c| notice.category == c);
        let matches_priority = self.priority.is_none_or(|p| notice.priority == p);

        matches_search && matches_category && matches_priority
    }
}

/// Aggregate statistics over the notice collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NoticeStats {
    /// Total number of notices.
    pub total: usize,
    /// Notices filed as urgent or carrying high priority.
    pub urgent: usize,
    /// Notices created within the last 7 days.
    pub this_week: usize,
    /// Number of distinct authors.
    pub authors: usize,
}
