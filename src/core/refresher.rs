use std::sync::Arc;

use crate::core::store::TrackerListStore;
use crate::domain::model::TrackerSet;
use crate::domain::ports::TrackerListSource;
use crate::utils::error::{Result, TrackerError};

/// Extra attempts after the first failed fetch.
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 2;

/// Fetches the remote best-trackers list and publishes a new snapshot.
///
/// Callers must not run two refreshes at once; [`crate::core::scheduler::RefreshScheduler`]
/// waits for each refresh to finish before starting the next one.
pub struct TrackerRefresher<S: TrackerListSource> {
    source: S,
    store: Arc<TrackerListStore>,
    retry_attempts: u32,
}

impl<S: TrackerListSource> TrackerRefresher<S> {
    pub fn new(source: S, store: Arc<TrackerListStore>) -> Self {
        Self {
            source,
            store,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
        }
    }

    pub fn with_retry_attempts(mut self, retry_attempts: u32) -> Self {
        self.retry_attempts = retry_attempts;
        self
    }

    pub fn store(&self) -> &Arc<TrackerListStore> {
        &self.store
    }

    /// On failure the store keeps its previous snapshot.
    pub async fn refresh(&self) -> Result<TrackerSet> {
        let best = self.fetch_best_trackers().await?;
        let snapshot = self.store.publish_best(best.clone());
        tracing::info!(
            "Retrieved best trackers (version {}, {} anime, {} russian): {:?}",
            snapshot.version,
            snapshot.all_anime.len(),
            snapshot.all_russian.len(),
            best
        );
        Ok(best)
    }

    async fn fetch_best_trackers(&self) -> Result<TrackerSet> {
        let max_attempts = self.retry_attempts.saturating_add(1);
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.source.fetch().await {
                Ok(body) => return Ok(parse_tracker_list(&body)),
                Err(e) if attempt < max_attempts => {
                    tracing::warn!(
                        "Best trackers fetch attempt {}/{} failed: {}",
                        attempt,
                        max_attempts,
                        e
                    );
                }
                Err(e) => {
                    tracing::error!("Failed retrieving best trackers: {}", e);
                    return Err(TrackerError::NetworkError {
                        attempts: attempt,
                        source: Box::new(e),
                    });
                }
            }
        }
    }
}

/// Splits the blank-line separated list. Malformed text yields whatever
/// entries survive, possibly none.
pub fn parse_tracker_list(body: &str) -> TrackerSet {
    body.replace("\r\n", "\n")
        .trim()
        .split("\n\n")
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
