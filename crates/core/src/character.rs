//! Character records as served by the Disney API.
//!
//! The field names follow the wire format (`_id`, camelCase lists) so the
//! same types decode upstream responses and serialize our own JSON routes.
//! Decoding is strict about types but lenient about absent lists: a missing
//! `films` array is an empty list, a `films` string is an error.

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::CharacterId;

// ---------------------------------------------------------------------------
// Paging defaults
// ---------------------------------------------------------------------------

/// First page of the character listing.
pub const DEFAULT_PAGE: u32 = 1;

/// Characters per page on the home grid.
pub const DEFAULT_PAGE_SIZE: u32 = 8;

/// Characters shown in the footer's featured block.
pub const FEATURED_PAGE_SIZE: u32 = 4;

/// Largest page size accepted by the passthrough routes.
pub const MAX_PAGE_SIZE: u32 = 100;

// ---------------------------------------------------------------------------
// Character
// ---------------------------------------------------------------------------

/// A single Disney character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    #[serde(rename = "_id")]
    pub id: CharacterId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default)]
    pub films: Vec<String>,
    #[serde(default)]
    pub short_films: Vec<String>,
    #[serde(default)]
    pub tv_shows: Vec<String>,
    #[serde(default)]
    pub video_games: Vec<String>,
    #[serde(default)]
    pub park_attractions: Vec<String>,
    #[serde(default)]
    pub allies: Vec<String>,
    #[serde(default)]
    pub enemies: Vec<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Character {
    /// The comma-separated film list shown on cards, or `None` when the
    /// character has no films and the line should be left out.
    pub fn featured_films(&self) -> Option<String> {
        if self.films.is_empty() {
            None
        } else {
            Some(join_titles(&self.films))
        }
    }

    /// Outbound link for "more details": the source page when known,
    /// otherwise the API's canonical URL.
    pub fn details_link(&self) -> &str {
        self.source_url.as_deref().unwrap_or(&self.url)
    }
}

/// Join titles the way every list line renders them.
pub fn join_titles(titles: &[String]) -> String {
    titles.join(", ")
}

// ---------------------------------------------------------------------------
// Paged listing
// ---------------------------------------------------------------------------

/// Pagination block of a list response.
///
/// `previousPage` / `nextPage` hold full URLs; `null` and absent both mean
/// "no such page".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub previous_page: Option<String>,
    #[serde(default)]
    pub next_page: Option<String>,
}

/// One page of characters plus its pagination info.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterList {
    #[serde(default)]
    pub info: PaginationInfo,
    #[serde(default, deserialize_with = "one_or_many")]
    pub data: Vec<Character>,
}

/// The API collapses a single search hit into a bare object instead of a
/// one-element array.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<Character>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<Character>),
        One(Box<Character>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::Many(characters)) => characters,
        Some(OneOrMany::One(character)) => vec![*character],
        None => Vec::new(),
    })
}
