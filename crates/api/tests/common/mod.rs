#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use fansite_core::character::{Character, CharacterList, PaginationInfo, FEATURED_PAGE_SIZE};
use fansite_core::types::CharacterId;
use fansite_disney::{ApiOperation, CharacterSource, DisneyApiError};
use http_body_util::BodyExt;
use tower::ServiceExt;

use fansite_api::config::ServerConfig;
use fansite_api::router::build_app_router;
use fansite_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        disney_api_url: "http://disney.invalid".to_string(),
        session_idle_secs: 1800,
    }
}

/// Build the full application router (same middleware stack as `main.rs`)
/// around the given source.
pub fn build_test_app(source: Arc<FakeSource>) -> Router {
    let config = test_config();
    let state = AppState::new(config.clone(), source);
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// In-memory character source
// ---------------------------------------------------------------------------

/// Catalog-backed stand-in for the Disney API.
///
/// Each operation can be switched to fail with a non-success status.
#[derive(Default)]
pub struct FakeSource {
    catalog: Vec<Character>,
    pub fail_list: AtomicBool,
    pub fail_featured: AtomicBool,
    pub fail_details: AtomicBool,
    pub fail_search: AtomicBool,
    pub list_calls: AtomicUsize,
}

impl FakeSource {
    pub fn new(catalog: Vec<Character>) -> Arc<Self> {
        Arc::new(Self {
            catalog,
            ..Self::default()
        })
    }

    /// 24 characters; the first is Mickey Mouse with films `["Fantasia"]`.
    pub fn standard() -> Arc<Self> {
        Self::new(standard_catalog())
    }

    pub fn fail(flag: &AtomicBool) {
        flag.store(true, Ordering::SeqCst);
    }

    pub fn recover(flag: &AtomicBool) {
        flag.store(false, Ordering::SeqCst);
    }

    fn page(&self, page: u32, page_size: u32) -> CharacterList {
        let start = ((page.max(1) - 1) * page_size) as usize;
        let data: Vec<Character> = self
            .catalog
            .iter()
            .skip(start)
            .take(page_size as usize)
            .cloned()
            .collect();
        let count = self.catalog.len() as u32;
        CharacterList {
            info: PaginationInfo {
                total_pages: count.div_ceil(page_size),
                count,
                previous_page: None,
                next_page: None,
            },
            data,
        }
    }
}

fn failure(operation: ApiOperation) -> DisneyApiError {
    DisneyApiError::Status {
        operation,
        status: 500,
    }
}

#[async_trait]
impl CharacterSource for FakeSource {
    async fn list_characters(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<CharacterList, DisneyApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(failure(ApiOperation::ListCharacters));
        }
        Ok(self.page(page, page_size))
    }

    async fn list_featured(&self) -> Result<CharacterList, DisneyApiError> {
        if self.fail_featured.load(Ordering::SeqCst) {
            return Err(failure(ApiOperation::ListFeatured));
        }
        Ok(self.page(1, FEATURED_PAGE_SIZE))
    }

    async fn get_character(&self, id: CharacterId) -> Result<Character, DisneyApiError> {
        if self.fail_details.load(Ordering::SeqCst) {
            return Err(failure(ApiOperation::GetCharacter));
        }
        self.catalog
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(DisneyApiError::Status {
                operation: ApiOperation::GetCharacter,
                status: 404,
            })
    }

    async fn search_characters(&self, query: &str) -> Result<CharacterList, DisneyApiError> {
        if self.fail_search.load(Ordering::SeqCst) {
            return Err(failure(ApiOperation::SearchCharacters));
        }
        let needle = query.to_lowercase();
        let data: Vec<Character> = self
            .catalog
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(CharacterList {
            info: PaginationInfo {
                total_pages: 1,
                count: data.len() as u32,
                previous_page: None,
                next_page: None,
            },
            data,
        })
    }
}

pub fn character(id: CharacterId, name: &str, films: &[&str]) -> Character {
    serde_json::from_value(serde_json::json!({
        "_id": id,
        "name": name,
        "films": films,
        "shortFilms": [],
        "tvShows": [],
        "imageUrl": format!("https://img.test/{id}.png"),
        "url": format!("https://api.disneyapi.dev/characters/{id}"),
    }))
    .unwrap()
}

pub fn standard_catalog() -> Vec<Character> {
    let mut catalog = vec![
        character(1, "Mickey Mouse", &["Fantasia"]),
        character(2, "Minnie Mouse", &["Mickey's Once Upon a Christmas"]),
        character(3, "Donald Duck", &["The Three Caballeros", "Fantasia 2000"]),
        character(4, "Goofy", &["A Goofy Movie"]),
        character(5, "Pluto", &[]),
        character(6, "Daisy Duck", &[]),
        character(7, "Chip", &["Chip 'n Dale: Rescue Rangers"]),
        character(8, "Dale", &["Chip 'n Dale: Rescue Rangers"]),
    ];
    for id in 9..=24 {
        catalog.push(character(id, &format!("Extra {id}"), &[]));
    }
    catalog
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// A `Cookie` header value carrying a fresh session id.
pub fn new_session() -> String {
    format!("fansite_session={}", uuid::Uuid::new_v4())
}

/// Send a request, optionally with a `Cookie` header.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    content_type: Option<&str>,
    body: Body,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    send(app, "GET", uri, cookie, None, Body::empty()).await
}

pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    json: serde_json::Value,
) -> Response<Body> {
    send(
        app,
        method,
        uri,
        cookie,
        Some("application/json"),
        Body::from(json.to_string()),
    )
    .await
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `<main>` element of a rendered page (the page content without header
/// or footer).
pub fn main_section(html: &str) -> &str {
    let start = html.find("<main>").expect("page has no <main>");
    let end = html.find("</main>").expect("page has no </main>");
    &html[start..end]
}

/// Number of character cards in an HTML fragment.
pub fn card_count(html: &str) -> usize {
    html.matches(r#"class="character-card""#).count()
}

/// All `Set-Cookie` header values of a response.
pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all("set-cookie")
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}
