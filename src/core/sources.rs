use std::sync::Arc;

use crate::core::classifier::ProviderClassifier;
use crate::core::store::TrackerListStore;
use crate::core::trackers::unique;
use crate::domain::model::{ContentClassification, StreamDescriptor};
use crate::domain::ports::TitleParser;

/// `tracker:<url>` per tracker followed by `dht:<info_hash>`.
///
/// `None` means no tracker information at all; an empty list still yields the
/// DHT entry.
pub fn get_sources<T: AsRef<str>>(
    trackers: Option<&[T]>,
    info_hash: &str,
) -> Option<Vec<String>> {
    let trackers = trackers?;
    Some(
        trackers
            .iter()
            .map(|tracker| format!("tracker:{}", tracker.as_ref()))
            .chain(std::iter::once(format!("dht:{info_hash}")))
            .collect(),
    )
}

/// Comma-separated variant of [`get_sources`]. A missing or empty string
/// yields `None`.
pub fn get_sources_from_csv(trackers: Option<&str>, info_hash: &str) -> Option<Vec<String>> {
    let trackers: Vec<&str> = trackers.filter(|t| !t.is_empty())?.split(',').collect();
    get_sources(Some(trackers.as_slice()), info_hash)
}

pub struct SourceEnricher<P: TitleParser> {
    titles: P,
    trackers: Arc<TrackerListStore>,
    classifier: Arc<ProviderClassifier>,
}

impl<P: TitleParser> SourceEnricher<P> {
    pub fn new(
        titles: P,
        trackers: Arc<TrackerListStore>,
        classifier: Arc<ProviderClassifier>,
    ) -> Self {
        Self {
            titles,
            trackers,
            classifier,
        }
    }

    /// Returns a copy of `stream` whose `sources` fit the stream's provider.
    pub fn enrich(&self, stream: &StreamDescriptor) -> StreamDescriptor {
        let provider = stream
            .title
            .as_deref()
            .and_then(|title| self.titles.extract_provider(title));

        match self.classifier.classify(provider.as_deref()) {
            ContentClassification::Anime => {
                let snapshot = self.trackers.snapshot();
                StreamDescriptor {
                    sources: get_sources(Some(snapshot.all_anime.as_slice()), &stream.info_hash),
                    ..stream.clone()
                }
            }
            ContentClassification::Russian => {
                let snapshot = self.trackers.snapshot();
                let existing = stream.sources.iter().flatten().cloned();
                let russian =
                    get_sources(Some(snapshot.all_russian.as_slice()), &stream.info_hash)
                        .unwrap_or_default();
                StreamDescriptor {
                    sources: Some(unique(existing.chain(russian))),
                    ..stream.clone()
                }
            }
            ContentClassification::General => stream.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{GearTitleParser, StaticProviderRegistry};

    fn enricher(best: &[&str]) -> SourceEnricher<GearTitleParser> {
        let trackers = Arc::new(TrackerListStore::new());
        trackers.publish_best(best.iter().map(|t| t.to_string()).collect());
        let classifier = Arc::new(ProviderClassifier::from_registry(
            &StaticProviderRegistry::builtin(),
        ));
        SourceEnricher::new(GearTitleParser, trackers, classifier)
    }

    fn stream(provider: &str, sources: Option<Vec<&str>>) -> StreamDescriptor {
        let mut stream =
            StreamDescriptor::new(Some(format!("Title 1080p\n⚙️ {provider}")), "H1");
        stream.sources = sources.map(|s| s.into_iter().map(String::from).collect());
        stream
            .extra
            .insert("fileIdx".to_string(), serde_json::json!(3));
        stream
    }

    #[test]
    fn test_get_sources() {
        assert_eq!(get_sources_from_csv(None, "H1"), None);
        assert_eq!(get_sources_from_csv(Some(""), "H1"), None);
        assert_eq!(
            get_sources_from_csv(Some("a,b"), "H1"),
            Some(vec![
                "tracker:a".to_string(),
                "tracker:b".to_string(),
                "dht:H1".to_string()
            ])
        );
        assert_eq!(get_sources::<String>(None, "H1"), None);
        assert_eq!(
            get_sources::<String>(Some(&[][..]), "H1"),
            Some(vec!["dht:H1".to_string()])
        );
    }

    #[test]
    fn test_anime_provider_replaces_sources() {
        let enricher = enricher(&["udp://best:1"]);
        let input = stream("NyaaSi", Some(vec!["tracker:old", "dht:H1"]));

        let output = enricher.enrich(&input);

        let sources = output.sources.clone().unwrap();
        assert_eq!(sources[0], "tracker:udp://best:1");
        assert_eq!(sources.last().unwrap(), "dht:H1");
        assert!(!sources.iter().any(|s| s == "tracker:old"));
        assert_eq!(
            sources.len(),
            enricher.trackers.snapshot().all_anime.len() + 1
        );
        assert_eq!(output.title, input.title);
        assert_eq!(output.extra, input.extra);
    }

    #[test]
    fn test_russian_provider_merges_sources() {
        let enricher = enricher(&["udp://best:1"]);
        let input = stream("Rutor", Some(vec!["tracker:own", "tracker:udp://best:1"]));

        let output = enricher.enrich(&input);

        let sources = output.sources.unwrap();
        assert_eq!(sources[0], "tracker:own");
        assert_eq!(sources[1], "tracker:udp://best:1");
        assert_eq!(
            sources.iter().filter(|s| *s == "tracker:udp://best:1").count(),
            1
        );
        assert_eq!(sources.iter().filter(|s| *s == "dht:H1").count(), 1);
        assert_eq!(
            sources.len(),
            1 + enricher.trackers.snapshot().all_russian.len() + 1
        );
    }

    #[test]
    fn test_russian_provider_without_existing_sources() {
        let enricher = enricher(&[]);
        let input = stream("Rutracker", None);

        let sources = enricher.enrich(&input).sources.unwrap();

        assert!(sources[0].starts_with("tracker:"));
        assert_eq!(sources.last().unwrap(), "dht:H1");
    }

    #[test]
    fn test_general_provider_is_unchanged_and_idempotent() {
        let enricher = enricher(&["udp://best:1"]);
        let input = stream("YTS", Some(vec!["tracker:own"]));

        let once = enricher.enrich(&input);
        let twice = enricher.enrich(&once);

        assert_eq!(once, input);
        assert_eq!(twice, input);
    }

    #[test]
    fn test_stream_without_title_is_unchanged() {
        let enricher = enricher(&[]);
        let input = StreamDescriptor::new(None, "H1");

        assert_eq!(enricher.enrich(&input), input);
    }

    #[test]
    fn test_enrich_before_first_refresh() {
        let classifier = Arc::new(ProviderClassifier::from_registry(
            &StaticProviderRegistry::builtin(),
        ));
        let enricher =
            SourceEnricher::new(GearTitleParser, Arc::new(TrackerListStore::new()), classifier);

        let output = enricher.enrich(&stream("NyaaSi", None));

        assert_eq!(output.sources, Some(vec!["dht:H1".to_string()]));
    }
}
