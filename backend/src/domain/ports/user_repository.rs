//! Port abstraction for user lookups and its errors.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tracing::error;

use crate::domain::{Error, User, UserId};

/// Persistence errors raised by user store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserStoreError {
    /// Store connection could not be established.
    #[error("user store connection failed: {message}")]
    Connection { message: String },

    /// Query failed during execution.
    #[error("user store query failed: {message}")]
    Query { message: String },
}

impl UserStoreError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

impl From<UserStoreError> for Error {
    fn from(err: UserStoreError) -> Self {
        // Detail stays in the log; clients get the generic 500 body.
        error!(error = %err, "user store failure");
        Self::internal("user store failure")
    }
}

/// Read-only access to the user records seeded by an external process.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError>;

    /// Fetch a user by exact username match.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserStoreError>;
}

/// In-memory user store used when no database is configured.
#[derive(Debug, Clone, Default)]
pub struct FixtureUserRepository {
    users: Vec<User>,
}

impl FixtureUserRepository {
    /// Build a store holding exactly the given users.
    #[must_use]
    pub fn with_users(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Development seed mirroring the external seeding process.
    #[must_use]
    pub fn seeded() -> Self {
        let created_at = Utc
            .with_ymd_and_hms(2024, 5, 1, 9, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);
        Self::with_users(vec![
            User {
                id: UserId::new(1),
                username: "ana".into(),
                created_at,
            },
            User {
                id: UserId::new(2),
                username: "bren".into(),
                created_at,
            },
        ])
    }
}

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError> {
        Ok(self.users.iter().find(|user| user.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserStoreError> {
        Ok(self
            .users
            .iter()
            .find(|user| user.username == username)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[tokio::test]
    async fn seeded_store_resolves_by_username_and_id() {
        let store = FixtureUserRepository::seeded();
        let by_name = store
            .find_by_username("ana")
            .await
            .expect("lookup succeeds")
            .expect("ana is seeded");
        let by_id = store
            .find_by_id(by_name.id)
            .await
            .expect("lookup succeeds")
            .expect("id resolves");
        assert_eq!(by_id, by_name);
    }

    #[tokio::test]
    async fn unknown_username_is_absent_not_an_error() {
        let store = FixtureUserRepository::seeded();
        let missing = store
            .find_by_username("nobody")
            .await
            .expect("lookup succeeds");
        assert!(missing.is_none());
    }

    #[rstest]
    #[case(UserStoreError::connection("refused"))]
    #[case(UserStoreError::query("syntax"))]
    fn store_failures_map_to_internal_errors(#[case] err: UserStoreError) {
        let domain_err = Error::from(err);
        assert_eq!(domain_err.code(), ErrorCode::InternalError);
    }
}
