use serde::Serialize;

use crate::models::notice::Notice;
use crate::models::user::User;

/// A point-in-time view of the session store, emitted to subscribers on
/// every mutation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionSnapshot {
    /// The currently authenticated user, if any.
    pub user: Option<User>,
    /// Whether a user is currently authenticated.
    pub is_authenticated: bool,
    /// Whether an asynchronous session operation is in flight.
    pub is_pending: bool,
}

impl SessionSnapshot {
    /// The unauthenticated initial state.
    pub fn empty() -> Self {
        SessionSnapshot {
            user: None,
            is_authenticated: false,
            is_pending: false,
        }
    }
}

/// A point-in-time view of the notice store, emitted to subscribers on
/// every mutation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NoticeSnapshot {
    /// The notice collection, newest first.
    pub notices: Vec<Notice>,
    /// Whether an asynchronous notice operation is in flight.
    pub is_loading: bool,
}
