use std::future::Future;
use std::time::Duration;

use crate::core::refresher::TrackerRefresher;
use crate::domain::ports::TrackerListSource;

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Re-runs the refresh on a fixed interval. Each refresh completes before the
/// next wait starts, so refreshes never overlap.
pub struct RefreshScheduler<S: TrackerListSource> {
    refresher: TrackerRefresher<S>,
    interval: Duration,
}

impl<S: TrackerListSource> RefreshScheduler<S> {
    pub fn new(refresher: TrackerRefresher<S>, interval: Duration) -> Self {
        Self {
            refresher,
            interval,
        }
    }

    pub fn refresher(&self) -> &TrackerRefresher<S> {
        &self.refresher
    }

    /// Returns whether the refresh succeeded; failures leave the old snapshot.
    pub async fn run_once(&self) -> bool {
        match self.refresher.refresh().await {
            Ok(best) => {
                tracing::info!("Tracker refresh completed with {} best trackers", best.len());
                true
            }
            Err(e) => {
                tracing::warn!(
                    "Tracker refresh failed, keeping snapshot version {}: {}",
                    self.refresher.store().version(),
                    e
                );
                false
            }
        }
    }

    /// Refreshes immediately, then every interval until `shutdown` resolves.
    pub async fn run_until<F: Future<Output = ()>>(&self, shutdown: F) {
        tokio::pin!(shutdown);
        loop {
            self.run_once().await;
            tracing::info!("Next tracker refresh in {:?}", self.interval);
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Tracker refresh scheduler stopped");
                    return;
                }
                _ = tokio::time::sleep(self.interval) => {}
            }
        }
    }
}
