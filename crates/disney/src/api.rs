//! REST API client for the Disney character endpoints.
//!
//! Wraps the four read-only calls the site needs (paged listing, featured
//! page, lookup by id, search by name) using [`reqwest`]. Every call is a
//! fresh request: there is no cache, retry, or client-side timeout.

use std::fmt;

use fansite_core::character::{Character, CharacterList, FEATURED_PAGE_SIZE};
use fansite_core::types::CharacterId;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Public host of the Disney API.
pub const DEFAULT_BASE_URL: &str = "https://api.disneyapi.dev";

/// The upstream call an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOperation {
    ListCharacters,
    ListFeatured,
    GetCharacter,
    SearchCharacters,
}

impl ApiOperation {
    /// Fixed human-readable message reported when the call fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            ApiOperation::ListCharacters | ApiOperation::ListFeatured => {
                "Failed to fetch characters."
            }
            ApiOperation::GetCharacter => "Failed to fetch character details.",
            ApiOperation::SearchCharacters => "Failed to search characters.",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ApiOperation::ListCharacters => "list_characters",
            ApiOperation::ListFeatured => "list_featured",
            ApiOperation::GetCharacter => "get_character",
            ApiOperation::SearchCharacters => "search_characters",
        }
    }
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from the Disney API layer.
#[derive(Debug, thiserror::Error)]
pub enum DisneyApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {source}")]
    Request {
        operation: ApiOperation,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-2xx status code.
    #[error("{}", .operation.failure_message())]
    Status { operation: ApiOperation, status: u16 },

    /// The body did not match the expected schema.
    #[error("{}", .operation.failure_message())]
    Decode {
        operation: ApiOperation,
        #[source]
        source: serde_json::Error,
    },
}

impl DisneyApiError {
    pub fn operation(&self) -> ApiOperation {
        match self {
            DisneyApiError::Request { operation, .. }
            | DisneyApiError::Status { operation, .. }
            | DisneyApiError::Decode { operation, .. } => *operation,
        }
    }

    /// The operation's fixed message, whatever the underlying cause.
    pub fn failure_message(&self) -> &'static str {
        self.operation().failure_message()
    }
}

/// The by-id endpoint has been seen both bare and wrapped in the list
/// envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum CharacterPayload {
    Wrapped { data: Character },
    Bare(Character),
}

impl CharacterPayload {
    fn into_character(self) -> Character {
        match self {
            CharacterPayload::Wrapped { data } => data,
            CharacterPayload::Bare(character) => character,
        }
    }
}

/// HTTP client for the Disney API.
#[derive(Debug, Clone)]
pub struct DisneyApi {
    client: reqwest::Client,
    base_url: String,
}

impl DisneyApi {
    /// Create a client for the given base URL, e.g. `https://api.disneyapi.dev`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /character?page=&pageSize=`
    pub async fn list_characters(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<CharacterList, DisneyApiError> {
        self.get_json(ApiOperation::ListCharacters, self.list_url(page, page_size))
            .await
    }

    /// The footer's fixed first page of [`FEATURED_PAGE_SIZE`] characters.
    pub async fn list_featured(&self) -> Result<CharacterList, DisneyApiError> {
        self.get_json(ApiOperation::ListFeatured, self.list_url(1, FEATURED_PAGE_SIZE))
            .await
    }

    /// `GET /character/{id}`
    pub async fn get_character(&self, id: CharacterId) -> Result<Character, DisneyApiError> {
        let payload: CharacterPayload = self
            .get_json(ApiOperation::GetCharacter, self.character_url(id))
            .await?;
        Ok(payload.into_character())
    }

    /// `GET /character?name=`
    pub async fn search_characters(&self, query: &str) -> Result<CharacterList, DisneyApiError> {
        self.get_json(ApiOperation::SearchCharacters, self.search_url(query))
            .await
    }

    pub fn list_url(&self, page: u32, page_size: u32) -> String {
        format!(
            "{}/character?page={page}&pageSize={page_size}",
            self.base_url
        )
    }

    pub fn character_url(&self, id: CharacterId) -> String {
        format!("{}/character/{id}", self.base_url)
    }

    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/character?name={}",
            self.base_url,
            urlencoding::encode(query)
        )
    }

    // ---- private helpers ----

    /// Issue a GET, require a success status, and decode the body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: ApiOperation,
        url: String,
    ) -> Result<T, DisneyApiError> {
        tracing::debug!(%operation, %url, "Disney API request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| DisneyApiError::Request { operation, source })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%operation, status = status.as_u16(), "Disney API returned an error status");
            return Err(DisneyApiError::Status {
                operation,
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| DisneyApiError::Request { operation, source })?;

        serde_json::from_slice(&bytes).map_err(|source| {
            tracing::warn!(%operation, error = %source, "Disney API response did not match schema");
            DisneyApiError::Decode { operation, source }
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    use super::*;

    /// Serve `router` on an ephemeral local port and return its base URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn page_json(names: &[&str]) -> serde_json::Value {
        let data: Vec<_> = names
            .iter()
            .enumerate()
            .map(|(i, name)| json!({ "_id": i + 1, "name": name, "films": [] }))
            .collect();
        json!({
            "info": { "totalPages": 1, "count": names.len(), "previousPage": null, "nextPage": null },
            "data": data
        })
    }

    #[test]
    fn builds_urls_against_base() {
        let api = DisneyApi::new("https://api.disneyapi.dev/");
        assert_eq!(
            api.list_url(2, 8),
            "https://api.disneyapi.dev/character?page=2&pageSize=8"
        );
        assert_eq!(
            api.character_url(308),
            "https://api.disneyapi.dev/character/308"
        );
        assert_eq!(
            api.search_url("Mickey Mouse"),
            "https://api.disneyapi.dev/character?name=Mickey%20Mouse"
        );
    }

    #[test]
    fn failure_messages_are_fixed_per_operation() {
        assert_eq!(
            ApiOperation::ListCharacters.failure_message(),
            "Failed to fetch characters."
        );
        assert_eq!(
            ApiOperation::ListFeatured.failure_message(),
            "Failed to fetch characters."
        );
        assert_eq!(
            ApiOperation::GetCharacter.failure_message(),
            "Failed to fetch character details."
        );
        assert_eq!(
            ApiOperation::SearchCharacters.failure_message(),
            "Failed to search characters."
        );
    }

    #[test]
    fn status_error_displays_operation_message() {
        let err = DisneyApiError::Status {
            operation: ApiOperation::SearchCharacters,
            status: 503,
        };
        assert_eq!(err.to_string(), "Failed to search characters.");
        assert_eq!(err.operation(), ApiOperation::SearchCharacters);
    }

    #[tokio::test]
    async fn list_characters_sends_paging_params() {
        #[derive(serde::Deserialize)]
        struct Paging {
            page: u32,
            #[serde(rename = "pageSize")]
            page_size: u32,
        }

        let router = Router::new().route(
            "/character",
            get(|Query(p): Query<Paging>| async move {
                let names: Vec<String> = (0..p.page_size).map(|i| format!("p{}-{i}", p.page)).collect();
                let refs: Vec<&str> = names.iter().map(String::as_str).collect();
                Json(page_json(&refs))
            }),
        );
        let api = DisneyApi::new(serve(router).await);

        let list = api.list_characters(3, 8).await.unwrap();
        assert_eq!(list.data.len(), 8);
        assert_eq!(list.data[0].name, "p3-0");

        let featured = api.list_featured().await.unwrap();
        assert_eq!(featured.data.len(), 4);
        assert_eq!(featured.data[0].name, "p1-0");
    }

    #[tokio::test]
    async fn get_character_accepts_bare_and_wrapped_bodies() {
        let router = Router::new()
            .route(
                "/character/1",
                get(|| async { Json(json!({ "_id": 1, "name": "Achilles" })) }),
            )
            .route(
                "/character/2",
                get(|| async {
                    Json(json!({ "info": { "count": 1 }, "data": { "_id": 2, "name": "Abu" } }))
                }),
            );
        let api = DisneyApi::new(serve(router).await);

        assert_eq!(api.get_character(1).await.unwrap().name, "Achilles");
        assert_eq!(api.get_character(2).await.unwrap().name, "Abu");
    }

    #[tokio::test]
    async fn non_success_status_is_generic_failure() {
        let router = Router::new().route(
            "/character/{id}",
            get(|| async { (StatusCode::NOT_FOUND, "no such character") }),
        );
        let api = DisneyApi::new(serve(router).await);

        let err = api.get_character(999).await.unwrap_err();
        assert_matches!(
            err,
            DisneyApiError::Status {
                operation: ApiOperation::GetCharacter,
                status: 404
            }
        );
        assert_eq!(err.to_string(), "Failed to fetch character details.");
    }

    #[tokio::test]
    async fn schema_mismatch_fails_fast() {
        let router = Router::new().route(
            "/character",
            get(|| async { Json(json!({ "data": [{ "name": "No id" }] })) }),
        );
        let api = DisneyApi::new(serve(router).await);

        let err = api.search_characters("x").await.unwrap_err();
        assert_matches!(
            err,
            DisneyApiError::Decode {
                operation: ApiOperation::SearchCharacters,
                ..
            }
        );
    }

    #[tokio::test]
    async fn unreachable_host_is_request_error() {
        // Bind then drop so the port is very likely closed.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = DisneyApi::new(format!("http://{addr}"));
        let err = api.list_characters(1, 8).await.unwrap_err();
        assert_matches!(err, DisneyApiError::Request { .. });
        assert_eq!(err.failure_message(), "Failed to fetch characters.");
    }
}
