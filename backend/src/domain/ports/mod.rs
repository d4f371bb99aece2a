//! Ports between the domain and its adapters.
//!
//! Inbound adapters depend on these traits rather than on concrete
//! persistence, so handler tests can substitute in-memory doubles and
//! the server can run without a database during development.

mod article_repository;
mod user_repository;

pub use article_repository::{ArticleRepository, ArticleStoreError, FixtureArticleRepository};
pub use user_repository::{FixtureUserRepository, UserRepository, UserStoreError};
