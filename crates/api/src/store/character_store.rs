use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use fansite_core::character::{
    Character, CharacterList, PaginationInfo, DEFAULT_PAGE, DEFAULT_PAGE_SIZE,
};
use fansite_core::types::Timestamp;
use fansite_disney::{CharacterSource, DisneyApiError};
use serde::Serialize;
use tokio::sync::OnceCell;

/// Point-in-time copy of a store, as rendered by the grid and returned by
/// `GET /api/v1/store`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub characters: Vec<Character>,
    /// Pagination of the result currently shown, if any fetch has landed.
    pub info: Option<PaginationInfo>,
    pub is_loading: bool,
    pub is_error: bool,
    pub search_query: String,
    /// When `characters` was last replaced.
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Default)]
struct StoreState {
    view: StoreSnapshot,
    /// Generation of the most recently issued fetch.
    latest: u64,
}

fn read(state: &RwLock<StoreState>) -> RwLockReadGuard<'_, StoreState> {
    state.read().unwrap_or_else(PoisonError::into_inner)
}

fn write(state: &RwLock<StoreState>) -> RwLockWriteGuard<'_, StoreState> {
    state.write().unwrap_or_else(PoisonError::into_inner)
}

/// Character list and search state for one browser session.
///
/// Every fetch is tagged with a generation number; only the most recently
/// issued fetch may replace `characters` or clear `is_loading`, so a slow
/// response to an older search can never overwrite a newer one. A failed
/// fetch sets `is_error` and keeps the characters already shown. So does a
/// fetch whose request is dropped before the upstream answers (timeout,
/// client disconnect).
///
/// The state lock is a short synchronous section and is never held across
/// an upstream call.
pub struct CharacterStore {
    source: Arc<dyn CharacterSource>,
    state: RwLock<StoreState>,
    mounted: OnceCell<()>,
}

impl CharacterStore {
    /// An unmounted store: no characters, not loading, no error, empty query.
    pub fn new(source: Arc<dyn CharacterSource>) -> Self {
        Self {
            source,
            state: RwLock::new(StoreState::default()),
            mounted: OnceCell::new(),
        }
    }

    /// Run the initial default fetch exactly once. Concurrent callers wait
    /// for the same fetch.
    pub async fn mount(&self) {
        self.mounted
            .get_or_init(|| async {
                self.load_default().await;
            })
            .await;
    }

    /// Fetch the first unfiltered page and show it.
    pub async fn load_default(&self) {
        let fetch = self.begin("default");
        let result = self
            .source
            .list_characters(DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
            .await;
        fetch.finish(result);
    }

    /// Search by name and show the matches (empty when the API returns no
    /// data).
    pub async fn find_characters(&self, query: &str) {
        let fetch = self.begin("search");
        let result = self.source.search_characters(query).await;
        fetch.finish(result);
    }

    /// Update the search box text. Does not search; clearing the box
    /// reloads the default page.
    pub async fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        let cleared = query.is_empty();

        write(&self.state).view.search_query = query;

        if cleared {
            self.load_default().await;
        }
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        read(&self.state).view.clone()
    }

    pub async fn search_query(&self) -> String {
        read(&self.state).view.search_query.clone()
    }

    /// Issue a new generation and mark the store loading.
    fn begin(&self, kind: &'static str) -> InFlight<'_> {
        let mut state = write(&self.state);
        state.latest += 1;
        state.view.is_loading = true;
        InFlight {
            state: &self.state,
            generation: state.latest,
            kind,
            settled: false,
        }
    }
}

/// One issued fetch. Settles the store either through [`InFlight::finish`]
/// or, if the owning future is dropped first, as a failure on drop.
struct InFlight<'a> {
    state: &'a RwLock<StoreState>,
    generation: u64,
    kind: &'static str,
    settled: bool,
}

impl InFlight<'_> {
    /// Apply the fetch result if this is still the latest fetch.
    fn finish(mut self, result: Result<CharacterList, DisneyApiError>) {
        self.settled = true;
        let mut state = write(self.state);

        if self.generation != state.latest {
            tracing::debug!(
                kind = self.kind,
                generation = self.generation,
                latest = state.latest,
                "Discarding superseded character fetch"
            );
            return;
        }

        state.view.is_loading = false;
        match result {
            Ok(list) => {
                tracing::debug!(kind = self.kind, count = list.data.len(), "Character fetch applied");
                state.view.characters = list.data;
                state.view.info = Some(list.info);
                state.view.is_error = false;
                state.view.updated_at = Some(Utc::now());
            }
            Err(e) => {
                tracing::warn!(kind = self.kind, error = %e, "Character fetch failed, keeping previous list");
                state.view.is_error = true;
            }
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut state = write(self.state);
        if self.generation == state.latest {
            tracing::warn!(kind = self.kind, "Character fetch abandoned before completion");
            state.view.is_loading = false;
            state.view.is_error = true;
        }
    }
}
