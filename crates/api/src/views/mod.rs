//! HTML rendering.
//!
//! Every component is a plain function from typed data to an HTML fragment.
//! Nothing here performs I/O: handlers fetch first, then render. All text
//! taken from the API or the user goes through [`html::escape`].

pub mod card;
pub mod character_details;
pub mod character_list;
pub mod featured_list;
pub mod footer;
pub mod header;
pub mod html;
pub mod layout;
pub mod profile;

/// Outcome of a component's own fetch, as far as rendering is concerned.
///
/// Page-local fetches finish before the page is written, so there is no
/// loading state here; only the session store can be observed mid-fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetch<T> {
    /// The fetch was not attempted (e.g. no usable route id).
    Skipped,
    Failed,
    Ready(T),
}

/// Text shown while the session store has a fetch in flight.
pub const LOADING_TEXT: &str = "Loading...";

/// Text shown when a character grid could not be loaded.
pub const LIST_ERROR_TEXT: &str = "Error loading characters.";
