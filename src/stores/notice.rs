use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use chrono::{Duration, Utc};
use tokio::sync::watch;

use crate::error::{AppError, Result};
use crate::latency::Latency;
use crate::models::notice::{Category, Notice, NoticeDraft, NoticeFilter, NoticeStats, Priority};
use crate::models::session::NoticeSnapshot;
use crate::models::user::Author;
use crate::stores::session::SessionStore;

struct NoticeState {
    /// Insertion-ordered, newest first: writes prepend.
    notices: Vec<Notice>,
    next_id: u64,
    loading: bool,
}

/// Owns the notice collection; every write attributes authorship to the
/// session store's current user.
///
/// The store never validates form content itself: callers run
/// [`validate_notice_form`](crate::validation::notice::validate_notice_form)
/// before invoking a write.
pub struct NoticeStore {
    state: RwLock<NoticeState>,
    events: watch::Sender<NoticeSnapshot>,
    session: Arc<SessionStore>,
    latency: Arc<dyn Latency>,
}

impl NoticeStore {
    /// Creates a store preloaded with the given notices.
    ///
    /// # Arguments
    ///
    /// * `seed` - Initial notices, newest first. The id counter starts
    ///   past the largest seeded id.
    /// * `session` - The session store consulted for authorship.
    /// * `latency` - The simulated-backend delay strategy.
    pub fn new(seed: Vec<Notice>, session: Arc<SessionStore>, latency: Arc<dyn Latency>) -> Self {
        let next_id = seed.iter().map(|n| n.id).max().unwrap_or(0) + 1;
        let (events, _) = watch::channel(NoticeSnapshot {
            notices: seed.clone(),
            is_loading: false,
        });
        NoticeStore {
            state: RwLock::new(NoticeState {
                notices: seed,
                next_id,
                loading: false,
            }),
            events,
            session,
            latency,
        }
    }

    /// Creates a notice authored by the current session user.
    ///
    /// The authorization check runs pre-flight, before the simulated round
    /// trip: invoking this without an active session is an integration bug,
    /// not a user error.
    ///
    /// # Arguments
    ///
    /// * `draft` - The validated form payload.
    ///
    /// # Returns
    ///
    /// The stored notice, or [`AppError::Unauthorized`] when no session
    /// user is present.
    pub async fn create(&self, draft: NoticeDraft) -> Result<Notice> {
        let author = match self.session.current_user() {
            Some(user) => Author::from(&user),
            None => {
                tracing::warn!("❌ Notice create rejected: no active session");
                return Err(AppError::Unauthorized);
            }
        };

        self.set_loading(true);
        tokio::time::sleep(self.latency.round_trip()).await;

        let now = Utc::now();
        let notice = {
            let mut state = self.write();
            let notice = Notice {
                id: state.next_id,
                title: draft.title,
                content: draft.content,
                category: draft.category,
                priority: draft.priority,
                author,
                created_at: now,
                updated_at: now,
                expires_at: draft.expires_at,
            };
            state.next_id += 1;
            state.notices.insert(0, notice.clone());
            state.loading = false;
            notice
        };

        self.publish();
        tracing::info!("✅ Notice created: {}", notice.id);
        Ok(notice)
    }

    /// Updates the notice with the given id.
    ///
    /// Replaces the form fields, preserves `id`, `author`, and
    /// `created_at`, and stamps `updated_at`. Other notices are untouched.
    ///
    /// # Arguments
    ///
    /// * `id` - The notice to update.
    /// * `draft` - The validated form payload.
    ///
    /// # Returns
    ///
    /// The updated notice, or `None` when no notice has that id (the
    /// collection is left unchanged).
    pub async fn update(&self, id: u64, draft: NoticeDraft) -> Option<Notice> {
        self.set_loading(true);
        tokio::time::sleep(self.latency.round_trip()).await;

        let updated = {
            let mut state = self.write();
            let found = state.notices.iter_mut().find(|n| n.id == id);
            let updated = found.map(|notice| {
                notice.title = draft.title.clone();
                notice.content = draft.content.clone();
                notice.category = draft.category;
                notice.priority = draft.priority;
                notice.expires_at = draft.expires_at;
                notice.updated_at = Utc::now();
                notice.clone()
            });
            state.loading = false;
            updated
        };

        self.publish();
        match &updated {
            Some(notice) => tracing::info!("✅ Notice updated: {}", notice.id),
            None => tracing::debug!("Notice not found for update: {}", id),
        }
        updated
    }

    /// Deletes the notice with the given id.
    ///
    /// Idempotent: a second call with the same id reports `false` without
    /// error.
    ///
    /// # Arguments
    ///
    /// * `id` - The notice to delete.
    ///
    /// # Returns
    ///
    /// Whether a removal occurred.
    pub async fn delete(&self, id: u64) -> bool {
        self.set_loading(true);
        tokio::time::sleep(self.latency.round_trip()).await;

        let removed = {
            let mut state = self.write();
            let before = state.notices.len();
            state.notices.retain(|n| n.id != id);
            state.loading = false;
            state.notices.len() < before
        };

        self.publish();
        if removed {
            tracing::info!("✅ Notice deleted: {}", id);
        } else {
            tracing::debug!("Notice not found for delete: {}", id);
        }
        removed
    }

    /// Looks up a notice by id. Pure, no side effects.
    pub fn get_by_id(&self, id: u64) -> Option<Notice> {
        self.read().notices.iter().find(|n| n.id == id).cloned()
    }

    /// Derives a filtered view of the collection.
    ///
    /// The underlying order (newest first) is preserved and the collection
    /// is never mutated.
    pub fn list(&self, filter: &NoticeFilter) -> Vec<Notice> {
        self.read()
            .notices
            .iter()
            .filter(|n| filter.matches(n))
            .cloned()
            .collect()
    }

    /// Computes aggregate statistics over the current collection.
    ///
    /// Recomputed on demand, never cached.
    pub fn stats(&self) -> NoticeStats {
        let state = self.read();
        let week_ago = Utc::now() - Duration::days(7);
        NoticeStats {
            total: state.notices.len(),
            urgent: state
                .notices
                .iter()
                .filter(|n| n.category == Category::Urgent || n.priority == Priority::High)
                .count(),
            this_week: state
                .notices
                .iter()
                .filter(|n| n.created_at >= week_ago)
                .count(),
            authors: state
                .notices
                .iter()
                .map(|n| n.author.id)
                .collect::<HashSet<_>>()
                .len(),
        }
    }

    /// Returns whether an asynchronous operation is in flight.
    pub fn is_loading(&self) -> bool {
        self.read().loading
    }

    /// Returns the current state as a snapshot.
    pub fn snapshot(&self) -> NoticeSnapshot {
        let state = self.read();
        NoticeSnapshot {
            notices: state.notices.clone(),
            is_loading: state.loading,
        }
    }

    /// Subscribes to state changes. Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> watch::Receiver<NoticeSnapshot> {
        self.events.subscribe()
    }

    fn set_loading(&self, loading: bool) {
        self.write().loading = loading;
        self.publish();
    }

    fn publish(&self) {
        self.events.send_replace(self.snapshot());
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, NoticeState> {
        // A poisoned lock means a prior panic mid-mutation.
        self.state.read().expect("notice state lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, NoticeState> {
        self.state.write().expect("notice state lock poisoned")
    }
}
