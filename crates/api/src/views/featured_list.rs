use fansite_core::character::CharacterList;

use super::card::character_grid;
use super::{Fetch, LIST_ERROR_TEXT};

/// The footer's featured block. Fetched independently of the session
/// store.
pub fn featured_list(featured: &Fetch<CharacterList>) -> String {
    match featured {
        Fetch::Failed => format!("<div>{LIST_ERROR_TEXT}</div>"),
        Fetch::Skipped => String::new(),
        Fetch::Ready(list) => format!(
            concat!(
                r#"<section class="featured-list">"#,
                r#"<h1 class="featured-heading">Featured Characters!</h1>"#,
                "{grid}",
                "</section>",
            ),
            grid = character_grid(&list.data),
        ),
    }
}

#[cfg(test)]
mod tests {
    use fansite_core::character::Character;

    use super::*;

    fn list(names: &[&str]) -> CharacterList {
        CharacterList {
            data: names
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    serde_json::from_value::<Character>(
                        serde_json::json!({ "_id": i + 1, "name": name }),
                    )
                    .unwrap()
                })
                .collect(),
            ..CharacterList::default()
        }
    }

    #[test]
    fn ready_renders_heading_and_cards() {
        let html = featured_list(&Fetch::Ready(list(&["Chip", "Dale", "Pluto", "Daisy"])));
        assert!(html.contains("Featured Characters!"));
        assert_eq!(html.matches(r#"class="character-card""#).count(), 4);
    }

    #[test]
    fn status_texts() {
        assert_eq!(
            featured_list(&Fetch::Failed),
            "<div>Error loading characters.</div>"
        );
        assert_eq!(featured_list(&Fetch::Skipped), "");
    }
}
