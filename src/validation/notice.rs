use serde::Serialize;

use crate::models::notice::NoticeDraft;

/// Field-level errors for the notice form.
///
/// Category, priority, and expiry are constrained by their types and need
/// no runtime check.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NoticeFormErrors {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NoticeFormErrors {
    /// Returns `true` when no field has an error.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// Validates a notice form.
///
/// Pure and side-effect free; an empty result means every constraint is
/// satisfied.
///
/// # Arguments
///
/// * `draft` - The notice form to validate.
///
/// # Returns
///
/// A field-to-message mapping, empty when the form is valid.
pub fn validate_notice_form(draft: &NoticeDraft) -> NoticeFormErrors {
    let mut errors = NoticeFormErrors::default();

    let title_len = draft.title.trim().chars().count();
    if title_len == 0 {
        errors.title = Some("Title is required".to_string());
    } else if title_len < 5 {
        errors.title = Some("Title must be at least 5 characters".to_string());
    } else if title_len > 100 {
        errors.title = Some("Title must be less than 100 characters".to_string());
    }

    let content_len = draft.content.trim().chars().count();
    if content_len == 0 {
        errors.content = Some("Content is required".to_string());
    } else if content_len < 20 {
        errors.content = Some("Content must be at least 20 characters".to_string());
    } else if content_len > 1000 {
        errors.content = Some("Content must be less than 1000 characters".to_string());
    }

    errors
}
