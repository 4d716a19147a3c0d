use fansite_core::profile::UserProfile;

use super::html::escape;

/// Shown (as a blocking alert) after the profile form is saved.
pub const PROFILE_SAVED_TEXT: &str = "Profile updated!";

/// Read-only view of a saved profile.
pub fn user_profile(profile: &UserProfile) -> String {
    format!(
        concat!(
            r#"<div class="user-profile">"#,
            "<h1>{name}</h1>",
            "<p>Location: {location}</p>",
            "<p>Favorite Character: {character}</p>",
            "<p>Favorite Movie: {movie}</p>",
            "<p>Favorite Disneyland: {park}</p>",
            "</div>",
        ),
        name = escape(&profile.full_name()),
        location = escape(&profile.location()),
        character = escape(&profile.favorite_character),
        movie = escape(&profile.favorite_movie),
        park = escape(&profile.favorite_disneyland),
    )
}

/// (input name, label) for every profile field, in form order.
const FORM_FIELDS: [(&str, &str); 7] = [
    ("firstName", "First Name"),
    ("lastName", "Last Name"),
    ("city", "City"),
    ("state", "State"),
    ("favoriteCharacter", "Favorite Character"),
    ("favoriteMovie", "Favorite Movie"),
    ("favoriteDisneyland", "Favorite Disneyland"),
];

/// Empty profile form posting back to `/profile`.
pub fn user_profile_form() -> String {
    let inputs: String = FORM_FIELDS
        .iter()
        .map(|(name, label)| {
            format!(r#"<label>{label}<input type="text" name="{name}" value=""></label>"#)
        })
        .collect();

    format!(
        r#"<form class="user-profile-form" action="/profile" method="post">{inputs}<button type="submit">Update Profile</button></form>"#
    )
}

/// Script raising the save confirmation when the page loads.
pub fn profile_saved_alert() -> String {
    format!(r#"<script>alert("{PROFILE_SAVED_TEXT}");</script>"#)
}
