//! Browser sessions.
//!
//! Each browser gets its own character store, keyed by a random id kept in
//! the `fansite_session` cookie. The middleware issues the cookie on first
//! contact; handlers read the id through the [`SessionId`] extractor.

use std::fmt;

use axum::extract::{FromRequestParts, Request};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::cookies::{append_set_cookie, read_cookie};
use crate::error::AppError;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "fansite_session";

/// Identifier of one browser session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse the cookie value; anything that is not a UUID is ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(Self)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Attach a [`SessionId`] to the request, minting one (and the cookie that
/// carries it) when the browser did not send a valid one.
pub async fn ensure_session(mut request: Request, next: Next) -> Response {
    let existing = read_cookie(request.headers(), SESSION_COOKIE).and_then(SessionId::parse);

    let (session, minted) = match existing {
        Some(session) => (session, false),
        None => (SessionId::new(), true),
    };
    request.extensions_mut().insert(session);

    let mut response = next.run(request).await;

    if minted {
        tracing::debug!(%session, "Issued new session");
        append_set_cookie(
            response.headers_mut(),
            SESSION_COOKIE,
            &session.to_string(),
            true,
        );
    }
    response
}

impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionId>()
            .copied()
            .ok_or_else(|| AppError::InternalError("session middleware is not installed".into()))
    }
}
