//! Profile page and its JSON counterpart.
//!
//! The profile lives only in the `userProfile` cookie; the server reads it
//! from the request and writes it back with `Set-Cookie`.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use fansite_core::profile::{UserProfile, PROFILE_COOKIE};

use crate::cookies::{append_set_cookie, read_cookie};
use crate::error::AppResult;
use crate::handlers::pages::render_page;
use crate::middleware::session::SessionId;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::views::profile::{profile_saved_alert, user_profile, user_profile_form};

/// The profile stored in the request's cookie. A cookie that does not decode
/// is treated as absent.
fn saved_profile(headers: &HeaderMap) -> Option<UserProfile> {
    let raw = read_cookie(headers, PROFILE_COOKIE)?;
    match UserProfile::from_cookie_value(raw) {
        Ok(profile) => Some(profile),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unreadable profile cookie");
            None
        }
    }
}

/// Build a response carrying `body` and the profile cookie.
fn with_profile_cookie(body: impl IntoResponse, profile: &UserProfile) -> AppResult<Response> {
    let value = profile.to_cookie_value()?;
    let mut response = body.into_response();
    append_set_cookie(response.headers_mut(), PROFILE_COOKIE, &value, false);
    Ok(response)
}

// ---------------------------------------------------------------------------
// HTML
// ---------------------------------------------------------------------------

/// GET /profile
///
/// Saved profile if the cookie is present, otherwise the empty form.
pub async fn profile_page(
    State(state): State<AppState>,
    session: SessionId,
    headers: HeaderMap,
) -> impl IntoResponse {
    let content = match saved_profile(&headers) {
        Some(profile) => user_profile(&profile),
        None => user_profile_form(),
    };

    let query = state.stores.get_or_mount(session).await.search_query().await;
    render_page(&state, &query, &content).await
}

/// POST /profile
///
/// Store the submitted form in the cookie and confirm with an alert.
pub async fn save_profile(
    State(state): State<AppState>,
    session: SessionId,
    Form(profile): Form<UserProfile>,
) -> AppResult<Response> {
    let content = format!("{}{}", user_profile(&profile), profile_saved_alert());
    let query = state.stores.get_or_mount(session).await.search_query().await;
    let page = render_page(&state, &query, &content).await;

    tracing::info!(%session, "Profile saved");
    with_profile_cookie(page, &profile)
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// GET /api/v1/profile
///
/// Returns 204 when no readable profile cookie was sent.
pub async fn get_profile(headers: HeaderMap) -> Response {
    match saved_profile(&headers) {
        Some(profile) => Json(DataResponse { data: profile }).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// PUT /api/v1/profile
pub async fn put_profile(Json(profile): Json<UserProfile>) -> AppResult<Response> {
    let body = Json(DataResponse {
        data: profile.clone(),
    });
    with_profile_cookie(body, &profile)
}
