//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal
//! with domain-friendly operations: persisting or forgetting the logged-in
//! user, advancing the view counter, and resetting the whole session.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, UserId};

pub(crate) const USER_ID_KEY: &str = "user_id";
pub(crate) const PAGE_VIEWS_KEY: &str = "page_views";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated user's id in the session cookie.
    pub fn persist_user(&self, user_id: UserId) -> Result<(), Error> {
        self.0
            .insert(USER_ID_KEY, user_id.get())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Fetch the current user id from the session, if present.
    ///
    /// The id is a weak reference; whether it still resolves to a user is
    /// the caller's concern.
    pub fn user_id(&self) -> Result<Option<UserId>, Error> {
        let id = self
            .0
            .get::<i32>(USER_ID_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        Ok(id.map(UserId::new))
    }

    /// Remove the user id if present. Idempotent; the view counter is kept.
    pub fn forget_user(&self) {
        self.0.remove(USER_ID_KEY);
    }

    /// Advance the session view counter by one and return the new value.
    ///
    /// An absent counter reads as zero, so the first call returns 1. The
    /// counter is session-global: it advances for every viewed article id,
    /// even ids that do not resolve to an article.
    pub fn record_page_view(&self) -> Result<u32, Error> {
        let views = self
            .0
            .get::<u32>(PAGE_VIEWS_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?
            .unwrap_or(0)
            .saturating_add(1);
        self.0
            .insert(PAGE_VIEWS_KEY, views)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))?;
        Ok(views)
    }

    /// Reset the session to its empty state: no user, no view counter.
    /// Idempotent.
    pub fn reset(&self) {
        self.0.remove(USER_ID_KEY);
        self.0.remove(PAGE_VIEWS_KEY);
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
