use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Announce endpoint, e.g. `udp://tracker.opentrackr.org:1337/announce`.
pub type TrackerUrl = String;

/// Ordered tracker list without duplicates.
pub type TrackerSet = Vec<TrackerUrl>;

/// Indexer content category. Values the indexer adds later map to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[serde(alias = "MOVIE", alias = "Movie")]
    Movie,
    #[serde(alias = "SERIES", alias = "Series")]
    Series,
    #[serde(alias = "ANIME", alias = "Anime")]
    Anime,
    #[serde(rename = "xxx", alias = "XXX")]
    Adult,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentClassification {
    General,
    Anime,
    Russian,
}

/// Torrent metadata as stored by the indexer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TorrentRecord {
    pub info_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trackers: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl TorrentRecord {
    /// Record used when the metadata store has nothing for `info_hash`.
    pub fn minimal(info_hash: impl Into<String>) -> Self {
        Self {
            info_hash: info_hash.into(),
            trackers: None,
            content_type: None,
            title: None,
            provider: None,
        }
    }

    /// Trackers embedded in the record, split on commas.
    pub fn tracker_list(&self) -> TrackerSet {
        self.trackers
            .as_deref()
            .map(|trackers| {
                trackers
                    .split(',')
                    .map(str::trim)
                    .filter(|tracker| !tracker.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Stream entry handed to players. Fields this crate does not know about are
/// carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub info_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl StreamDescriptor {
    pub fn new(title: Option<String>, info_hash: impl Into<String>) -> Self {
        Self {
            title,
            info_hash: info_hash.into(),
            sources: None,
            extra: serde_json::Map::new(),
        }
    }
}

/// One entry of the provider registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEntry {
    pub label: String,
    #[serde(default)]
    pub anime: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign: Option<String>,
}

impl ProviderEntry {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            anime: false,
            foreign: None,
        }
    }

    pub fn anime(label: &str) -> Self {
        Self {
            anime: true,
            ..Self::new(label)
        }
    }

    pub fn foreign(label: &str, flag: &str) -> Self {
        Self {
            foreign: Some(flag.to_string()),
            ..Self::new(label)
        }
    }
}

/// Input of the magnet codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagnetFields {
    pub info_hash: String,
    pub name: Option<String>,
    pub announce: TrackerSet,
}

/// Tracker lists derived from one refresh. Replaced as a whole, never edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerSnapshot {
    pub version: u64,
    pub refreshed_at: Option<DateTime<Utc>>,
    pub best: TrackerSet,
    pub all_anime: TrackerSet,
    pub all_russian: TrackerSet,
}
