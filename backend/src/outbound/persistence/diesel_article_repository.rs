//! PostgreSQL-backed `ArticleRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{ArticleRepository, ArticleStoreError};
use crate::domain::{Article, ArticleId};

use super::models::ArticleRow;
use super::pool::{DbPool, PoolError};
use super::schema::articles;

/// Diesel-backed implementation of the `ArticleRepository` port.
#[derive(Clone)]
pub struct DieselArticleRepository {
    pool: DbPool,
}

impl DieselArticleRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to article store errors.
fn map_pool_error(error: PoolError) -> ArticleStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            ArticleStoreError::connection(message)
        }
    }
}

/// Map Diesel errors to article store errors.
fn map_diesel_error(error: diesel::result::Error) -> ArticleStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            ArticleStoreError::connection("database connection error")
        }
        _ => ArticleStoreError::query("database error"),
    }
}

#[async_trait]
impl ArticleRepository for DieselArticleRepository {
    async fn list(&self) -> Result<Vec<Article>, ArticleStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Natural return order; the contract promises no explicit sort.
        let rows: Vec<ArticleRow> = articles::table
            .select(ArticleRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Article::from).collect())
    }

    async fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, ArticleStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ArticleRow> = articles::table
            .filter(articles::id.eq(id.get()))
            .select(ArticleRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Article::from))
    }
}

#[cfg(test)]
mod tests {
    //! Error mapping coverage; query behaviour is exercised against a
    //! live database by the external deployment checks.
    use super::*;

    #[test]
    fn pool_errors_map_to_connection_failures() {
        let err = map_pool_error(PoolError::build("bad url"));
        assert_eq!(err, ArticleStoreError::connection("bad url"));
    }

    #[test]
    fn other_diesel_errors_map_to_query_failures() {
        let err = map_diesel_error(diesel::result::Error::NotFound);
        assert_eq!(err, ArticleStoreError::query("database error"));
    }
}
