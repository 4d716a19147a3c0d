//! The character data seam.
//!
//! Everything above the HTTP client (the character store, page handlers,
//! the JSON passthrough routes) talks to a `dyn CharacterSource` so the
//! upstream can be swapped for an in-memory source.

use async_trait::async_trait;
use fansite_core::character::{Character, CharacterList};
use fansite_core::types::CharacterId;

use crate::api::{DisneyApi, DisneyApiError};

/// Read-only access to Disney characters.
#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// One page of the unfiltered listing.
    async fn list_characters(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<CharacterList, DisneyApiError>;

    /// The small fixed page shown as "featured".
    async fn list_featured(&self) -> Result<CharacterList, DisneyApiError>;

    /// A single character.
    async fn get_character(&self, id: CharacterId) -> Result<Character, DisneyApiError>;

    /// Characters whose name matches `query`.
    async fn search_characters(&self, query: &str) -> Result<CharacterList, DisneyApiError>;
}

#[async_trait]
impl CharacterSource for DisneyApi {
    async fn list_characters(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<CharacterList, DisneyApiError> {
        DisneyApi::list_characters(self, page, page_size).await
    }

    async fn list_featured(&self) -> Result<CharacterList, DisneyApiError> {
        DisneyApi::list_featured(self).await
    }

    async fn get_character(&self, id: CharacterId) -> Result<Character, DisneyApiError> {
        DisneyApi::get_character(self, id).await
    }

    async fn search_characters(&self, query: &str) -> Result<CharacterList, DisneyApiError> {
        DisneyApi::search_characters(self, query).await
    }
}
