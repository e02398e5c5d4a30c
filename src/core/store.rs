use std::sync::{Arc, RwLock};

use crate::domain::model::{TrackerSet, TrackerSnapshot};

/// Holds the current tracker snapshot. Readers get an `Arc` to a complete
/// snapshot; a refresh swaps the whole value under one write lock.
#[derive(Debug, Default)]
pub struct TrackerListStore {
    current: RwLock<Arc<TrackerSnapshot>>,
}

impl TrackerListStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Arc<TrackerSnapshot> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    pub fn version(&self) -> u64 {
        self.snapshot().version
    }

    /// Derives all lists from `best` and publishes them as the next version.
    pub fn publish_best(&self, best: TrackerSet) -> Arc<TrackerSnapshot> {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        let next = Arc::new(TrackerSnapshot::from_best(best, guard.version + 1));
        *guard = Arc::clone(&next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_starts_empty() {
        let store = TrackerListStore::new();
        let snapshot = store.snapshot();

        assert_eq!(snapshot.version, 0);
        assert!(snapshot.refreshed_at.is_none());
        assert!(snapshot.best.is_empty());
        assert!(snapshot.all_anime.is_empty());
        assert!(snapshot.all_russian.is_empty());
    }

    #[test]
    fn test_publish_replaces_all_lists_together() {
        let store = TrackerListStore::new();
        store.publish_best(vec!["udp://first:1".to_string()]);
        let before = store.snapshot();

        store.publish_best(vec!["udp://second:2".to_string()]);
        let after = store.snapshot();

        assert_eq!(after.version, 2);
        assert_eq!(after.all_anime[0], "udp://second:2");
        assert_eq!(after.all_russian[0], "udp://second:2");
        assert!(!after.all_anime.iter().any(|t| t == "udp://first:1"));
        assert!(!after.all_russian.iter().any(|t| t == "udp://first:1"));

        // A reader holding the old snapshot keeps a consistent view.
        assert_eq!(before.version, 1);
        assert_eq!(before.all_anime[0], "udp://first:1");
        assert_eq!(before.all_russian[0], "udp://first:1");
    }

    #[test]
    fn test_concurrent_readers_see_matching_lists() {
        let store = Arc::new(TrackerListStore::new());
        store.publish_best(vec!["udp://v1:1".to_string()]);

        let writer = {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for i in 2..200 {
                    store.publish_best(vec![format!("udp://v{i}:1")]);
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..500 {
                        let snapshot = store.snapshot();
                        assert_eq!(snapshot.best[0], snapshot.all_anime[0]);
                        assert_eq!(snapshot.best[0], snapshot.all_russian[0]);
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
        assert_eq!(store.version(), 199);
    }
}
