//! Article entity.
//!
//! Articles are created and destroyed externally; this system serves
//! them read-only behind the session view limit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Server-assigned article identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(i32);

impl ArticleId {
    /// Wrap a raw database identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw integer value, as stored in the articles table.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Published article as serialised by the listing and show endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Article {
    /// Stable article identifier.
    #[schema(value_type = i32, example = 1)]
    pub id: ArticleId,
    /// Byline author name.
    #[schema(example = "Ada Lovelace")]
    pub author: String,
    /// Headline.
    #[schema(example = "Notes on the Analytical Engine")]
    pub title: String,
    /// Full article body.
    pub content: String,
    /// Teaser shown in listings alongside the full body.
    pub preview: String,
    /// Estimated reading time in minutes.
    #[schema(example = 8)]
    pub minutes_to_read: i32,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
}
