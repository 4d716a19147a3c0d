pub mod characters;
pub mod health;
pub mod pages;
pub mod profile;
pub mod store;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /characters                      paged listing (?page=&pageSize=)
/// /characters/featured             fixed featured page
/// /characters/search               search by name (?name=)
/// /characters/{id}                 single character
///
/// /store                           session store snapshot
/// /store/query                     set search text (PUT)
/// /store/search                    run search (POST)
///
/// /profile                         profile cookie (GET, PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/characters", characters::router())
        .nest("/store", store::router())
        .nest("/profile", profile::router())
}
