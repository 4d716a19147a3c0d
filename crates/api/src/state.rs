use std::sync::Arc;

use fansite_disney::CharacterSource;

use crate::config::ServerConfig;
use crate::store::StoreRegistry;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Upstream character data (the Disney API in production).
    pub source: Arc<dyn CharacterSource>,
    /// One character store per browser session.
    pub stores: Arc<StoreRegistry>,
}

impl AppState {
    /// Wire a state around a character source, with an empty store registry
    /// that shares the same source.
    pub fn new(config: ServerConfig, source: Arc<dyn CharacterSource>) -> Self {
        Self {
            config: Arc::new(config),
            stores: Arc::new(StoreRegistry::new(Arc::clone(&source))),
            source,
        }
    }
}
