//! Session-scoped character state.
//!
//! [`CharacterStore`] holds what the home grid shows for one browser: the
//! current characters, loading/error flags and the search box text.
//! [`StoreRegistry`] owns one store per session and is the only way handlers
//! reach them.

pub mod character_store;
pub mod registry;

pub use character_store::{CharacterStore, StoreSnapshot};
pub use registry::StoreRegistry;
