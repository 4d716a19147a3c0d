use fansite_core::character::CharacterList;

use super::featured_list::featured_list;
use super::Fetch;

pub const LEGAL_TEXT: &str = "For educational use only. All characters and content are the \
property of Disney. This test is for private use and development testing only and should not \
be distributed for public consumption";

/// Featured block followed by the static footer.
pub fn footer(featured: &Fetch<CharacterList>) -> String {
    format!(
        concat!(
            "{featured}",
            r#"<footer class="footer">"#,
            r#"<div class="logo">Disney</div>"#,
            r#"<p class="legal">{legal}</p>"#,
            "</footer>",
        ),
        featured = featured_list(featured),
        legal = LEGAL_TEXT,
    )
}
