use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;

use crate::domain::model::TorrentRecord;
use crate::domain::ports::TorrentStore;
use crate::utils::error::{Result, TrackerError};

/// Torrent metadata held in memory, keyed by lowercase info hash.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTorrentStore {
    records: HashMap<String, TorrentRecord>,
}

impl InMemoryTorrentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = TorrentRecord>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    /// Loads a JSON array of indexer records.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let records: Vec<TorrentRecord> = serde_json::from_str(&content)?;
        tracing::debug!(
            "Loaded {} torrent records from {}",
            records.len(),
            path.as_ref().display()
        );
        Ok(Self::from_records(records))
    }

    pub fn insert(&mut self, record: TorrentRecord) {
        self.records
            .insert(record.info_hash.to_lowercase(), record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl TorrentStore for InMemoryTorrentStore {
    async fn get_torrent(&self, info_hash: &str) -> Result<TorrentRecord> {
        self.records
            .get(&info_hash.to_lowercase())
            .cloned()
            .ok_or_else(|| TrackerError::MetadataLookupError {
                info_hash: info_hash.to_string(),
                message: "no torrent record".to_string(),
            })
    }
}
