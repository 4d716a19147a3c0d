//! Character passthrough routes, mounted at `/characters`.
//!
//! ```text
//! GET    /                 -> list_characters
//! GET    /featured         -> list_featured
//! GET    /search           -> search_characters
//! GET    /{id}             -> get_character
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::characters;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(characters::list_characters))
        .route("/featured", get(characters::list_featured))
        .route("/search", get(characters::search_characters))
        .route("/{id}", get(characters::get_character))
}
