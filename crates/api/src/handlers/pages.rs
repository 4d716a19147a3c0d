//! HTML page handlers.
//!
//! Every page is the layout (header bound to the session's search query,
//! page content, footer with its own featured fetch). Upstream failures
//! never turn into error responses here; they become status text inside
//! the page.

use std::fmt::Display;

use axum::extract::{Path, Query, State};
use axum::response::{Html, Redirect};
use fansite_core::types::CharacterId;

use crate::middleware::session::SessionId;
use crate::query::SearchFormParams;
use crate::state::AppState;
use crate::views::character_details::character_details;
use crate::views::character_list::character_list;
use crate::views::footer::footer;
use crate::views::header::header;
use crate::views::layout::layout;
use crate::views::Fetch;

/// Turn a component fetch into its render state, logging failures.
pub(crate) fn fetched<T, E: Display>(what: &'static str, result: Result<T, E>) -> Fetch<T> {
    match result {
        Ok(value) => Fetch::Ready(value),
        Err(e) => {
            tracing::warn!(what, error = %e, "Page fetch failed");
            Fetch::Failed
        }
    }
}

/// Wrap `content` in the site layout.
pub(crate) async fn render_page(state: &AppState, search_query: &str, content: &str) -> Html<String> {
    let featured = fetched("featured", state.source.list_featured().await);
    Html(layout(&header(search_query), content, &footer(&featured)))
}

/// GET /
///
/// The session's character grid.
pub async fn home(State(state): State<AppState>, session: SessionId) -> Html<String> {
    let store = state.stores.get_or_mount(session).await;
    let snapshot = store.snapshot().await;

    render_page(&state, &snapshot.search_query, &character_list(&snapshot)).await
}

/// GET /search?q=
///
/// The header's search box: records the text, searches when it is non-empty
/// (an empty box restores the default page), then sends the browser home.
pub async fn search(
    State(state): State<AppState>,
    session: SessionId,
    Query(params): Query<SearchFormParams>,
) -> Redirect {
    let store = state.stores.get_or_mount(session).await;
    let query = params.q;

    store.set_search_query(query.clone()).await;
    if !query.is_empty() {
        store.find_characters(&query).await;
    }

    tracing::info!(%session, query = %query, "Search submitted");
    Redirect::to("/")
}

/// GET /character/{id}
///
/// Detail view. An id that is not an integer skips the fetch and renders
/// an empty section.
pub async fn character_page(
    State(state): State<AppState>,
    session: SessionId,
    Path(raw_id): Path<String>,
) -> Html<String> {
    let details = match raw_id.parse::<CharacterId>() {
        Ok(id) => fetched("character", state.source.get_character(id).await),
        Err(_) => {
            tracing::debug!(id = %raw_id, "Skipping character fetch for unusable id");
            Fetch::Skipped
        }
    };

    let query = state.stores.get_or_mount(session).await.search_query().await;
    render_page(&state, &query, &character_details(&details)).await
}
