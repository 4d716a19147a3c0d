use fansite_core::character::{join_titles, Character};

use super::html::escape;
use super::Fetch;

pub const DETAILS_ERROR_TEXT: &str = "Error loading character details.";

/// Detail view for `/character/{id}`.
///
/// A skipped fetch (no usable id) renders an empty section rather than an
/// error.
pub fn character_details(details: &Fetch<Character>) -> String {
    let body = match details {
        Fetch::Skipped => String::new(),
        Fetch::Failed => format!("<div>{DETAILS_ERROR_TEXT}</div>"),
        Fetch::Ready(character) => render(character),
    };
    format!(r#"<section class="character-details">{body}</section>"#)
}

fn render(character: &Character) -> String {
    let name = escape(&character.name);
    format!(
        concat!(
            "<h1>{name}</h1>",
            r#"<img src="{image}" alt="{name}">"#,
            "<p>Films: {films}</p>",
            "<p>Short Films: {short_films}</p>",
            "<p>TV Shows: {tv_shows}</p>",
            r#"<a href="{link}" target="_blank" rel="noopener noreferrer">"#,
            "Explore More Character Details",
            "</a>",
        ),
        name = name,
        image = escape(&character.image_url),
        films = escape(&join_titles(&character.films)),
        short_films = escape(&join_titles(&character.short_films)),
        tv_shows = escape(&join_titles(&character.tv_shows)),
        link = escape(character.details_link()),
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn stitch() -> Character {
        serde_json::from_value(json!({
            "_id": 6573,
            "name": "Stitch",
            "sourceUrl": "https://disney.fandom.com/wiki/Stitch",
            "films": ["Lilo & Stitch", "Stitch! The Movie"],
            "shortFilms": ["Lilo & Stitch: The Series"],
            "tvShows": ["Stitch!"],
            "imageUrl": "https://img.test/stitch.png"
        }))
        .unwrap()
    }

    #[test]
    fn ready_renders_all_lines() {
        let html = character_details(&Fetch::Ready(stitch()));

        assert!(html.contains("<h1>Stitch</h1>"));
        assert!(html.contains("Films: Lilo &amp; Stitch, Stitch! The Movie"));
        assert!(html.contains("Short Films: Lilo &amp; Stitch: The Series"));
        assert!(html.contains("TV Shows: Stitch!"));
        assert!(html.contains(r#"href="https://disney.fandom.com/wiki/Stitch""#));
        assert!(html.contains("Explore More Character Details"));
    }

    #[test]
    fn failure_shows_error_and_no_fields() {
        let html = character_details(&Fetch::Failed);
        assert!(html.contains("Error loading character details."));
        assert!(!html.contains("<h1>"));
        assert!(!html.contains("Films:"));
    }

    #[test]
    fn skipped_is_empty_section() {
        assert_eq!(
            character_details(&Fetch::Skipped),
            r#"<section class="character-details"></section>"#
        );
    }
}
