use fansite_core::character::Character;

use super::html::escape;

/// One character tile: image, name, featured films (only when there are
/// any) and a link to the detail page.
pub fn character_card(character: &Character) -> String {
    let name = escape(&character.name);

    let films = character
        .featured_films()
        .map(|films| format!(r#"<p class="featured-films">Featured Films: {}</p>"#, escape(&films)))
        .unwrap_or_default();

    format!(
        concat!(
            r#"<div class="character-card">"#,
            r#"<img src="{image}" alt="{name}" width="248" height="248">"#,
            r#"<h3 class="character-name">{name}</h3>"#,
            "{films}",
            r#"<a class="view-profile" href="/character/{id}">VIEW PROFILE</a>"#,
            "</div>",
        ),
        image = escape(&character.image_url),
        name = name,
        films = films,
        id = character.id,
    )
}

/// Responsive grid with one card per character, in order.
pub fn character_grid(characters: &[Character]) -> String {
    let cards: String = characters.iter().map(character_card).collect();
    format!(r#"<div class="character-grid">{cards}</div>"#)
}
