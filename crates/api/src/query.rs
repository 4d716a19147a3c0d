//! Query and body parameter types shared by the handlers.

use fansite_core::character::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use fansite_core::error::CoreError;
use serde::Deserialize;

/// Paging parameters for the listing passthrough (`?page=&pageSize=`).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PaginationParams {
    /// Apply defaults (page 1, 8 per page) and check bounds.
    pub fn resolve(&self) -> Result<(u32, u32), CoreError> {
        let page = self.page.unwrap_or(DEFAULT_PAGE);
        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        if page == 0 {
            return Err(CoreError::Validation("page must be at least 1".into()));
        }
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(CoreError::Validation(format!(
                "pageSize must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }
        Ok((page, page_size))
    }
}

/// `?name=` for the search passthrough.
#[derive(Debug, Deserialize)]
pub struct NameParams {
    pub name: Option<String>,
}

/// `?q=` submitted by the header search form.
#[derive(Debug, Default, Deserialize)]
pub struct SearchFormParams {
    #[serde(default)]
    pub q: String,
}

/// `{ "query": "..." }` body for the store actions.
#[derive(Debug, Deserialize)]
pub struct StoreQueryInput {
    #[serde(default)]
    pub query: String,
}
