use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use fansite_disney::CharacterSource;
use tokio::sync::RwLock;

use crate::middleware::session::SessionId;
use crate::store::CharacterStore;

struct StoreEntry {
    store: Arc<CharacterStore>,
    last_access: Instant,
}

/// Owns one [`CharacterStore`] per browser session.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application. Stores are created (and mounted) on first
/// use and dropped by [`StoreRegistry::unmount`] or the idle sweeper.
pub struct StoreRegistry {
    source: Arc<dyn CharacterSource>,
    stores: RwLock<HashMap<SessionId, StoreEntry>>,
}

impl StoreRegistry {
    /// Create an empty registry whose stores read from `source`.
    pub fn new(source: Arc<dyn CharacterSource>) -> Self {
        Self {
            source,
            stores: RwLock::new(HashMap::new()),
        }
    }

    /// Return the session's store, creating and mounting it on first use.
    ///
    /// The registry lock is released before mounting, so a slow first fetch
    /// for one session does not block other sessions.
    pub async fn get_or_mount(&self, session: SessionId) -> Arc<CharacterStore> {
        let store = {
            let mut stores = self.stores.write().await;
            let entry = stores.entry(session).or_insert_with(|| {
                tracing::debug!(%session, "Creating character store");
                StoreEntry {
                    store: Arc::new(CharacterStore::new(Arc::clone(&self.source))),
                    last_access: Instant::now(),
                }
            });
            entry.last_access = Instant::now();
            Arc::clone(&entry.store)
        };

        store.mount().await;
        store
    }

    /// Drop the session's store. Returns whether one existed.
    pub async fn unmount(&self, session: SessionId) -> bool {
        self.stores.write().await.remove(&session).is_some()
    }

    /// Drop every store not used within `max_idle`. Returns how many were
    /// dropped.
    pub async fn evict_idle(&self, max_idle: Duration) -> usize {
        let mut stores = self.stores.write().await;
        let before = stores.len();
        stores.retain(|_, entry| entry.last_access.elapsed() < max_idle);
        before - stores.len()
    }

    /// Number of live session stores.
    pub async fn len(&self) -> usize {
        self.stores.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.stores.read().await.is_empty()
    }
}
