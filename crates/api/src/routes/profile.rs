use axum::routing::get;
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Profile cookie routes, mounted at `/profile`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(profile::get_profile).put(profile::put_profile))
}
