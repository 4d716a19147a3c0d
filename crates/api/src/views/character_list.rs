use crate::store::StoreSnapshot;

use super::card::character_grid;
use super::html::escape;
use super::{LIST_ERROR_TEXT, LOADING_TEXT};

/// The home grid, bound to the session's store.
///
/// The "Search Results" heading appears only for a non-empty query. While a
/// fetch is in flight, or after one failed, the grid is replaced by the
/// matching status text.
pub fn character_list(snapshot: &StoreSnapshot) -> String {
    let heading = if snapshot.search_query.is_empty() {
        String::new()
    } else {
        format!(
            r#"<h1 class="search-results">Search Results - {}</h1>"#,
            escape(&snapshot.search_query)
        )
    };

    let body = if snapshot.is_loading {
        format!("<div>{LOADING_TEXT}</div>")
    } else if snapshot.is_error {
        format!("<div>{LIST_ERROR_TEXT}</div>")
    } else {
        character_grid(&snapshot.characters)
    };

    format!(r#"<div class="character-list">{heading}{body}</div>"#)
}
