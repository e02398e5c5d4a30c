use std::sync::Arc;

use crate::core::classifier::ProviderClassifier;
use crate::core::store::TrackerListStore;
use crate::core::trackers::unique;
use crate::domain::model::{ContentType, MagnetFields, TorrentRecord, TrackerSet};
use crate::domain::ports::{MagnetCodec, TorrentStore};

/// Builds magnet links carrying the torrent's own trackers plus the category
/// trackers from the current snapshot.
pub struct MagnetBuilder<S: TorrentStore, C: MagnetCodec> {
    torrents: S,
    codec: C,
    trackers: Arc<TrackerListStore>,
    classifier: Arc<ProviderClassifier>,
}

impl<S: TorrentStore, C: MagnetCodec> MagnetBuilder<S, C> {
    pub fn new(
        torrents: S,
        codec: C,
        trackers: Arc<TrackerListStore>,
        classifier: Arc<ProviderClassifier>,
    ) -> Self {
        Self {
            torrents,
            codec,
            trackers,
            classifier,
        }
    }

    /// Never fails: unknown hashes produce a magnet with the hash alone.
    pub async fn build_magnet(&self, info_hash: &str) -> String {
        let torrent = match self.torrents.get_torrent(info_hash).await {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!("Using minimal record for {}: {}", info_hash, e);
                TorrentRecord::minimal(info_hash)
            }
        };

        let announce = self.resolve_trackers(&torrent);
        self.codec.encode(&MagnetFields {
            info_hash: info_hash.to_string(),
            name: torrent.title,
            announce,
        })
    }

    /// Torrent trackers first, then anime and russian sets when they apply.
    pub fn resolve_trackers(&self, torrent: &TorrentRecord) -> TrackerSet {
        let snapshot = self.trackers.snapshot();
        let anime: &[String] = if torrent.content_type == Some(ContentType::Anime) {
            &snapshot.all_anime
        } else {
            &[]
        };
        let russian: &[String] = match torrent.provider.as_deref() {
            Some(provider) if self.classifier.is_russian(provider) => &snapshot.all_russian,
            _ => &[],
        };

        unique(
            torrent
                .tracker_list()
                .into_iter()
                .chain(anime.iter().cloned())
                .chain(russian.iter().cloned()),
        )
    }
}
