use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The role assigned to a user account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// An administrator account.
    Admin,
    /// A regular user account.
    User,
}

/// Represents a user in the system.
///
/// Carries no secret material: this is the public projection that gets
/// cached to disk when a session is established.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// The unique identifier for the user.
    pub id: u64,
    /// The user's full name.
    pub name: String,
    /// The user's email address.
    pub email: String,
    /// The user's role.
    pub role: Role,
    /// The timestamp when the user registered.
    pub created_at: DateTime<Utc>,
}

/// The author reference denormalized onto each notice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// The ID of the authoring user.
    pub id: u64,
    /// The name of the authoring user.
    pub name: String,
}

impl From<&User> for Author {
    fn from(user: &User) -> Self {
        Author {
            id: user.id,
            name: user.name.clone(),
        }
    }
}
