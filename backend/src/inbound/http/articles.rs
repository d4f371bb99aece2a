//! Article API handlers, including the session view-limit paywall.
//!
//! ```text
//! GET /articles
//! GET /articles/{id}
//! ```

use actix_web::{HttpResponse, web};

use crate::domain::{Article, ArticleId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Free article views granted to each session before the paywall closes.
pub const MAX_FREE_PAGE_VIEWS: u32 = 3;

/// List every article.
///
/// No pagination and no filtering; the response order is the store's
/// natural return order.
#[utoipa::path(
    get,
    path = "/articles",
    responses(
        (status = 200, description = "All articles", body = [Article]),
        (status = 500, description = "Internal server error")
    ),
    tags = ["articles"],
    operation_id = "indexArticles"
)]
pub async fn index_articles(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Article>>> {
    Ok(web::Json(state.articles.list().await?))
}

/// Show a single article, charging the session view budget.
///
/// The counter is charged before the lookup, so views of missing
/// articles and repeat views of the same article all consume budget.
#[utoipa::path(
    get,
    path = "/articles/{id}",
    params(("id" = i32, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article", body = Article),
        (status = 401, description = "Session view budget exhausted"),
        (status = 404, description = "No such article"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["articles"],
    operation_id = "showArticle"
)]
pub async fn show_article(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = ArticleId::new(path.into_inner());
    let views = session.record_page_view()?;
    if views > MAX_FREE_PAGE_VIEWS {
        return Err(Error::unauthorized("Maximum pageview limit reached"));
    }
    match state.articles.find_by_id(id).await? {
        Some(article) => Ok(HttpResponse::Ok().json(article)),
        None => Err(Error::not_found("Article not found")),
    }
}

#[cfg(test)]
mod tests {
    use crate::inbound::http::test_utils::{seeded_test_app, session_cookie};
    use actix_http::Request;
    use actix_web::cookie::Cookie;
    use actix_web::dev::{Service, ServiceResponse};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::{Value, json};

    /// Issue a GET, carrying the running session cookie forward.
    async fn get_with_session<S, B>(
        app: &S,
        uri: &str,
        cookie: &mut Option<Cookie<'static>>,
    ) -> ServiceResponse<B>
    where
        S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
        B: actix_web::body::MessageBody,
    {
        let mut req = actix_test::TestRequest::get().uri(uri);
        if let Some(cookie) = cookie.clone() {
            req = req.cookie(cookie);
        }
        let res = actix_test::call_service(app, req.to_request()).await;
        if let Some(rewritten) = session_cookie(&res) {
            *cookie = Some(rewritten);
        }
        res
    }

    #[actix_web::test]
    async fn index_returns_every_article_exactly_once() {
        let app = actix_test::init_service(seeded_test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/articles").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        let ids: Vec<i64> = body
            .as_array()
            .expect("array body")
            .iter()
            .map(|article| article.get("id").and_then(Value::as_i64).expect("id"))
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[actix_web::test]
    async fn index_does_not_charge_the_view_budget() {
        let app = actix_test::init_service(seeded_test_app()).await;
        let mut cookie = None;
        for _ in 0..5 {
            let res = get_with_session(&app, "/articles", &mut cookie).await;
            assert_eq!(res.status(), StatusCode::OK);
        }
        let res = get_with_session(&app, "/articles/1", &mut cookie).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn fourth_view_of_the_same_article_hits_the_paywall() {
        let app = actix_test::init_service(seeded_test_app()).await;
        let mut cookie = None;

        for _ in 0..3 {
            let res = get_with_session(&app, "/articles/1", &mut cookie).await;
            assert_eq!(res.status(), StatusCode::OK);
            let body: Value = actix_test::read_body_json(res).await;
            assert_eq!(body.get("id").and_then(Value::as_i64), Some(1));
        }

        let res = get_with_session(&app, "/articles/1", &mut cookie).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body, json!({ "message": "Maximum pageview limit reached" }));
    }

    #[actix_web::test]
    async fn budget_is_session_global_across_different_articles() {
        let app = actix_test::init_service(seeded_test_app()).await;
        let mut cookie = None;

        for id in [1, 2, 3] {
            let res = get_with_session(&app, &format!("/articles/{id}"), &mut cookie).await;
            assert_eq!(res.status(), StatusCode::OK);
        }

        let res = get_with_session(&app, "/articles/4", &mut cookie).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn missing_articles_still_consume_budget() {
        let app = actix_test::init_service(seeded_test_app()).await;
        let mut cookie = None;

        for _ in 0..3 {
            let res = get_with_session(&app, "/articles/999", &mut cookie).await;
            assert_eq!(res.status(), StatusCode::NOT_FOUND);
            let body: Value = actix_test::read_body_json(res).await;
            assert_eq!(body, json!({ "error": "Article not found" }));
        }

        // The article exists, but three misses already spent the budget.
        let res = get_with_session(&app, "/articles/1", &mut cookie).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn clearing_the_session_reopens_the_paywall() {
        let app = actix_test::init_service(seeded_test_app()).await;
        let mut cookie = None;

        for _ in 0..4 {
            get_with_session(&app, "/articles/1", &mut cookie).await;
        }

        let mut clear_req = actix_test::TestRequest::delete().uri("/clear");
        if let Some(cookie) = cookie.clone() {
            clear_req = clear_req.cookie(cookie);
        }
        let clear_res = actix_test::call_service(&app, clear_req.to_request()).await;
        assert_eq!(clear_res.status(), StatusCode::NO_CONTENT);
        if let Some(rewritten) = session_cookie(&clear_res) {
            cookie = Some(rewritten);
        }

        let res = get_with_session(&app, "/articles/1", &mut cookie).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn paywall_wins_even_when_the_article_is_missing() {
        let app = actix_test::init_service(seeded_test_app()).await;
        let mut cookie = None;

        for _ in 0..3 {
            get_with_session(&app, "/articles/1", &mut cookie).await;
        }

        // Over budget: the limit response masks the 404.
        let res = get_with_session(&app, "/articles/999", &mut cookie).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body, json!({ "message": "Maximum pageview limit reached" }));
    }
}
