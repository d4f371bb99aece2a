//! Domain primitives and aggregates.
//!
//! Purpose: Define strongly typed domain entities used by the API and
//! persistence layers. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.

pub mod article;
pub mod error;
pub mod ports;
pub mod user;

pub use self::article::{Article, ArticleId};
pub use self::error::{ApiResult, Error, ErrorCode};
pub use self::user::{User, UserId};
