//! OpenAPI documentation assembled from the handler annotations.

use utoipa::OpenApi;

use crate::domain::{Article, User};
use crate::inbound::http::users::LoginRequest;

/// Top-level OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::users::check_session,
        crate::inbound::http::users::clear_session,
        crate::inbound::http::articles::index_articles,
        crate::inbound::http::articles::show_article,
    ),
    components(schemas(User, Article, LoginRequest)),
    tags(
        (name = "users", description = "Login and session management"),
        (name = "articles", description = "Article listing and paywalled reads")
    )
)]
pub struct ApiDoc;
