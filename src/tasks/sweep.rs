//! Expiry Sweep Task
//!
//! Optional background task that periodically removes stale cache entries.
//! Without it, stale entries are only replaced when their key is requested
//! again.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::service::RoverService;

/// Spawns a background task that purges expired entries of both caches.
///
/// The first sweep runs one full interval after spawning.
///
/// # Arguments
/// * `service` - Service owning the caches
/// * `interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_sweep_task(service: Arc<RoverService>, interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!("Starting cache sweep task with interval of {} seconds", interval_secs);

        loop {
            tokio::time::sleep(interval).await;

            let removed = service.purge_expired().await;
            if removed == 0 {
                debug!("Cache sweep: no expired entries found");
            }
        }
    })
}
