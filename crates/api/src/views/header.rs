use super::html::escape;

/// Site header: logo, the search box bound to the store's query, and the
/// profile avatar.
///
/// The form submits to `/search`, which records the query and runs the
/// search in one step.
pub fn header(search_query: &str) -> String {
    format!(
        concat!(
            r#"<header class="header">"#,
            r#"<a class="logo" href="/">Disney</a>"#,
            r#"<form class="search" action="/search" method="get">"#,
            r#"<input type="search" name="q" placeholder="Search" value="{query}">"#,
            "</form>",
            r#"<a class="profile" href="/profile" aria-label="Profile">"#,
            r#"<span class="avatar"></span>"#,
            "</a>",
            "</header>",
        ),
        query = escape(search_query),
    )
}
