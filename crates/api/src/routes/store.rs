//! Session store routes, mounted at `/store`.
//!
//! ```text
//! GET    /          -> get_store
//! PUT    /query     -> set_query
//! POST   /search    -> search
//! ```

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::store;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(store::get_store))
        .route("/query", put(store::set_query))
        .route("/search", post(store::search))
}
