//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports backed by
//! PostgreSQL via `diesel-async` with `bb8` connection pooling.
//!
//! Principles:
//!
//! - **Thin adapters**: repositories only translate between Diesel rows
//!   and domain types; no business logic lives here.
//! - **Internal models**: row structs (`models.rs`) and the schema
//!   (`schema.rs`) never leak past this module.
//! - **Strongly typed errors**: database failures are mapped to the
//!   domain's store error types.

mod diesel_article_repository;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_article_repository::DieselArticleRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
