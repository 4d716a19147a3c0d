//! HTML page routes, mounted at the root.
//!
//! ```text
//! GET    /                   -> home
//! GET    /search             -> search (303 to /)
//! GET    /character/{id}     -> character_page
//! GET    /profile            -> profile_page
//! POST   /profile            -> save_profile
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::{pages, profile};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/search", get(pages::search))
        .route("/character/{id}", get(pages::character_page))
        .route(
            "/profile",
            get(profile::profile_page).post(profile::save_profile),
        )
}
