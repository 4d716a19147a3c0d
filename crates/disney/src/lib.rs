//! Disney API REST client.
//!
//! Provides the typed HTTP wrapper around `https://api.disneyapi.dev`
//! ([`api::DisneyApi`]) and the [`source::CharacterSource`] trait the web
//! layer depends on, so handlers and the character store can be driven by
//! an in-memory source in tests.

pub mod api;
pub mod source;

pub use api::{ApiOperation, DisneyApi, DisneyApiError};
pub use source::CharacterSource;
