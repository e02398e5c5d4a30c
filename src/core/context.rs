use std::sync::Arc;

use crate::core::classifier::ProviderClassifier;
use crate::core::magnet::MagnetBuilder;
use crate::core::refresher::TrackerRefresher;
use crate::core::sources::SourceEnricher;
use crate::core::store::TrackerListStore;
use crate::domain::ports::{MagnetCodec, ProviderRegistry, TitleParser, TorrentStore, TrackerListSource};

/// Shared state behind every component: one snapshot store and one provider
/// classification, created at startup.
#[derive(Debug, Clone)]
pub struct TrackerContext {
    store: Arc<TrackerListStore>,
    classifier: Arc<ProviderClassifier>,
}

impl TrackerContext {
    pub fn new<R: ProviderRegistry + ?Sized>(registry: &R) -> Self {
        Self {
            store: Arc::new(TrackerListStore::new()),
            classifier: Arc::new(ProviderClassifier::from_registry(registry)),
        }
    }

    pub fn store(&self) -> &Arc<TrackerListStore> {
        &self.store
    }

    pub fn classifier(&self) -> &Arc<ProviderClassifier> {
        &self.classifier
    }

    pub fn refresher<S: TrackerListSource>(&self, source: S) -> TrackerRefresher<S> {
        TrackerRefresher::new(source, Arc::clone(&self.store))
    }

    pub fn magnet_builder<S: TorrentStore, C: MagnetCodec>(
        &self,
        torrents: S,
        codec: C,
    ) -> MagnetBuilder<S, C> {
        MagnetBuilder::new(
            torrents,
            codec,
            Arc::clone(&self.store),
            Arc::clone(&self.classifier),
        )
    }

    pub fn enricher<P: TitleParser>(&self, titles: P) -> SourceEnricher<P> {
        SourceEnricher::new(titles, Arc::clone(&self.store), Arc::clone(&self.classifier))
    }
}
