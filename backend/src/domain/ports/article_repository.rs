//! Port abstraction for article reads and its errors.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tracing::error;

use crate::domain::{Article, ArticleId, Error};

/// Persistence errors raised by article store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArticleStoreError {
    /// Store connection could not be established.
    #[error("article store connection failed: {message}")]
    Connection { message: String },

    /// Query failed during execution.
    #[error("article store query failed: {message}")]
    Query { message: String },
}

impl ArticleStoreError {
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

impl From<ArticleStoreError> for Error {
    fn from(err: ArticleStoreError) -> Self {
        error!(error = %err, "article store failure");
        Self::internal("article store failure")
    }
}

/// Read-only access to the published articles.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Every stored article, in the store's natural return order.
    async fn list(&self) -> Result<Vec<Article>, ArticleStoreError>;

    /// Fetch an article by identifier.
    async fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, ArticleStoreError>;
}

/// In-memory article store used when no database is configured.
#[derive(Debug, Clone, Default)]
pub struct FixtureArticleRepository {
    articles: Vec<Article>,
}

impl FixtureArticleRepository {
    /// Build a store holding exactly the given articles.
    #[must_use]
    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    /// Development seed mirroring the external content pipeline.
    #[must_use]
    pub fn seeded() -> Self {
        let created_at = Utc
            .with_ymd_and_hms(2024, 5, 1, 9, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);
        let seed = |id: i32, author: &str, title: &str, minutes: i32| Article {
            id: ArticleId::new(id),
            author: author.into(),
            title: title.into(),
            content: format!("Full text of {title}."),
            preview: format!("Full text of {title}"),
            minutes_to_read: minutes,
            created_at,
        };
        Self::with_articles(vec![
            seed(1, "Ada Lovelace", "Notes on the Analytical Engine", 8),
            seed(2, "Grace Hopper", "Compilers in Practice", 12),
            seed(3, "Hedy Lamarr", "Frequency Hopping for Beginners", 6),
            seed(4, "Radia Perlman", "Spanning Trees Revisited", 9),
        ])
    }
}

#[async_trait]
impl ArticleRepository for FixtureArticleRepository {
    async fn list(&self) -> Result<Vec<Article>, ArticleStoreError> {
        Ok(self.articles.clone())
    }

    async fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, ArticleStoreError> {
        Ok(self.articles.iter().find(|article| article.id == id).cloned())
    }
}
