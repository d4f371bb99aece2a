//! Internal Diesel row structs for database reads.
//!
//! These types are implementation details of the persistence layer and
//! must never be exposed to the domain. The system never writes to
//! either table, so there are no insertable or changeset structs.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{Article, ArticleId, User, UserId};

use super::schema::{articles, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.id),
            username: row.username,
            created_at: row.created_at,
        }
    }
}

/// Row struct for reading from the articles table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = articles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ArticleRow {
    pub id: i32,
    pub author: String,
    pub title: String,
    pub content: String,
    pub preview: String,
    pub minutes_to_read: i32,
    pub created_at: DateTime<Utc>,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Self {
            id: ArticleId::new(row.id),
            author: row.author,
            title: row.title,
            content: row.content,
            preview: row.preview,
            minutes_to_read: row.minutes_to_read,
            created_at: row.created_at,
        }
    }
}
