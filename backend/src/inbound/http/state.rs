//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    ArticleRepository, FixtureArticleRepository, FixtureUserRepository, UserRepository,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserRepository>,
    pub articles: Arc<dyn ArticleRepository>,
}

impl HttpState {
    /// Construct state from concrete port implementations.
    #[must_use]
    pub fn new(users: Arc<dyn UserRepository>, articles: Arc<dyn ArticleRepository>) -> Self {
        Self { users, articles }
    }

    /// State backed by the seeded in-memory fixtures, for development
    /// runs without a database.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(
            Arc::new(FixtureUserRepository::seeded()),
            Arc::new(FixtureArticleRepository::seeded()),
        )
    }
}
