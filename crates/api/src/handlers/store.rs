//! JSON access to the session's character store.
//!
//! The two header events are exposed separately: `PUT /store/query` is the
//! text changing, `POST /store/search` is the search being run.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::session::SessionId;
use crate::query::StoreQueryInput;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/store
pub async fn get_store(
    State(state): State<AppState>,
    session: SessionId,
) -> AppResult<impl IntoResponse> {
    let store = state.stores.get_or_mount(session).await;

    Ok(Json(DataResponse {
        data: store.snapshot().await,
    }))
}

/// PUT /api/v1/store/query
///
/// Update the search text. An empty query reloads the default page.
pub async fn set_query(
    State(state): State<AppState>,
    session: SessionId,
    Json(input): Json<StoreQueryInput>,
) -> AppResult<impl IntoResponse> {
    let store = state.stores.get_or_mount(session).await;
    store.set_search_query(input.query).await;

    Ok(Json(DataResponse {
        data: store.snapshot().await,
    }))
}

/// POST /api/v1/store/search
///
/// Run a search and show its results. Upstream failures are reported
/// through the snapshot's `isError` flag, not as an error response.
pub async fn search(
    State(state): State<AppState>,
    session: SessionId,
    Json(input): Json<StoreQueryInput>,
) -> AppResult<impl IntoResponse> {
    if input.query.is_empty() {
        return Err(AppError::BadRequest("query must not be empty".into()));
    }

    let store = state.stores.get_or_mount(session).await;
    store.find_characters(&input.query).await;

    Ok(Json(DataResponse {
        data: store.snapshot().await,
    }))
}
