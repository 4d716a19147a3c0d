//! Periodic eviction of idle session stores.
//!
//! Browsers never announce that they are gone, so a store is dropped once
//! its session has been quiet for the configured idle period.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::store::StoreRegistry;

/// How often the sweep runs.
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Run the sweep loop until `cancel` is triggered.
pub async fn run(stores: Arc<StoreRegistry>, max_idle: Duration, cancel: CancellationToken) {
    tracing::info!(
        max_idle_secs = max_idle.as_secs(),
        interval_secs = SWEEP_INTERVAL.as_secs(),
        "Session sweeper started"
    );

    let mut interval = tokio::time::interval(SWEEP_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Session sweeper stopping");
                break;
            }
            _ = interval.tick() => {
                let evicted = stores.evict_idle(max_idle).await;
                if evicted > 0 {
                    let remaining = stores.len().await;
                    tracing::info!(evicted, remaining, "Evicted idle sessions");
                } else {
                    tracing::debug!("Session sweep: nothing idle");
                }
            }
        }
    }
}
