//! User entity.
//!
//! Users are seeded by an external process; this system only reads them
//! and never mutates or deletes a record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Server-assigned user identifier.
///
/// # Examples
/// ```
/// use backend::domain::UserId;
///
/// let id = UserId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw database identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw integer value, as stored in the users table.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registered user as serialised in login and session responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct User {
    /// Stable user identifier.
    #[schema(value_type = i32, example = 1)]
    pub id: UserId,
    /// Login name, matched exactly by the login operation.
    #[schema(example = "ana")]
    pub username: String,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
}
