//! Login and session API handlers.
//!
//! ```text
//! POST /login {"username":"ana"}
//! DELETE /logout
//! GET /check_session
//! DELETE /clear
//! ```

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use crate::domain::{Error, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Login request body for `POST /login`.
///
/// Example JSON: `{"username":"ana"}`
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LoginRequest {
    /// Username to match exactly against the user store.
    #[schema(example = "ana")]
    pub username: String,
}

/// Establish a session for an existing username.
///
/// There is deliberately no password or token check: the system performs
/// a direct username-to-record match. The session is only touched on a
/// successful lookup.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = User,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Missing body or username"),
        (status = 404, description = "Unknown username"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: Option<web::Json<LoginRequest>>,
) -> ApiResult<HttpResponse> {
    // A missing, unparseable, or username-less body all degrade to `None`.
    let Some(payload) = payload else {
        return Err(Error::invalid_request("Username is required"));
    };
    let username = payload.into_inner().username;
    match state.users.find_by_username(&username).await? {
        Some(user) => {
            session.persist_user(user.id)?;
            Ok(HttpResponse::Ok().json(user))
        }
        None => Err(Error::not_found("User not found")),
    }
}

/// Drop the logged-in user while keeping the rest of the session.
#[utoipa::path(
    delete,
    path = "/logout",
    responses(
        (status = 204, description = "Logged out; idempotent")
    ),
    tags = ["users"],
    operation_id = "logout"
)]
pub async fn logout(session: SessionContext) -> ApiResult<HttpResponse> {
    session.forget_user();
    Ok(HttpResponse::NoContent().finish())
}

/// Resolve the session's user, if any.
///
/// A `user_id` that no longer resolves to a user is removed from the
/// session so stale references heal themselves.
#[utoipa::path(
    get,
    path = "/check_session",
    responses(
        (status = 200, description = "Active session", body = User),
        (status = 401, description = "No usable session; body is an empty object")
    ),
    tags = ["users"],
    operation_id = "checkSession"
)]
pub async fn check_session(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let Some(user_id) = session.user_id()? else {
        return Ok(unauthorized_empty());
    };
    match state.users.find_by_id(user_id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => {
            warn!(%user_id, "session references a missing user; dropping it");
            session.forget_user();
            Ok(unauthorized_empty())
        }
    }
}

/// Reset the session to its empty state: user and view counter together.
#[utoipa::path(
    delete,
    path = "/clear",
    responses(
        (status = 204, description = "Session cleared; idempotent")
    ),
    tags = ["users"],
    operation_id = "clearSession"
)]
pub async fn clear_session(session: SessionContext) -> ApiResult<HttpResponse> {
    session.reset();
    Ok(HttpResponse::NoContent().finish())
}

fn unauthorized_empty() -> HttpResponse {
    HttpResponse::Unauthorized().json(json!({}))
}
