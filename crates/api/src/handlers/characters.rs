//! JSON passthrough to the Disney API.
//!
//! Each handler issues exactly one upstream request; nothing is cached.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use fansite_core::types::CharacterId;

use crate::error::{AppError, AppResult};
use crate::query::{NameParams, PaginationParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/characters?page=&pageSize=
pub async fn list_characters(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let (page, page_size) = params.resolve()?;
    let list = state.source.list_characters(page, page_size).await?;

    Ok(Json(DataResponse { data: list }))
}

/// GET /api/v1/characters/featured
pub async fn list_featured(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let list = state.source.list_featured().await?;

    Ok(Json(DataResponse { data: list }))
}

/// GET /api/v1/characters/search?name=
pub async fn search_characters(
    State(state): State<AppState>,
    Query(params): Query<NameParams>,
) -> AppResult<impl IntoResponse> {
    let name = params
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("name query parameter is required".into()))?;

    let list = state.source.search_characters(&name).await?;

    Ok(Json(DataResponse { data: list }))
}

/// GET /api/v1/characters/{id}
pub async fn get_character(
    State(state): State<AppState>,
    Path(id): Path<CharacterId>,
) -> AppResult<impl IntoResponse> {
    let character = state.source.get_character(id).await?;

    Ok(Json(DataResponse { data: character }))
}
