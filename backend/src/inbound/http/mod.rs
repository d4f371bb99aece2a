//! HTTP inbound adapter exposing the REST endpoints.

use actix_web::web;

pub mod articles;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use crate::domain::ApiResult;

/// The static route table.
///
/// Paths are exact, case-sensitive matches; only login tolerates a
/// trailing-slash variant. Anything else falls through to the
/// framework's 404/405 handling.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/login", web::post().to(users::login))
        .route("/login/", web::post().to(users::login))
        .route("/logout", web::delete().to(users::logout))
        .route("/check_session", web::get().to(users::check_session))
        .route("/clear", web::delete().to(users::clear_session))
        .route("/articles", web::get().to(articles::index_articles))
        .route("/articles/{id}", web::get().to(articles::show_article));
}
