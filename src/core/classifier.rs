use std::collections::HashSet;

use crate::domain::model::ContentClassification;
use crate::domain::ports::ProviderRegistry;

/// Flag the registry uses for russian providers.
pub const RUSSIAN_FLAG: &str = "🇷🇺";

/// Provider labels grouped by the tracker set they need. Built once at startup.
#[derive(Debug, Clone, Default)]
pub struct ProviderClassifier {
    anime_providers: HashSet<String>,
    russian_providers: HashSet<String>,
}

impl ProviderClassifier {
    pub fn from_registry<R: ProviderRegistry + ?Sized>(registry: &R) -> Self {
        let mut classifier = Self::default();
        for provider in registry.providers() {
            if provider.anime {
                classifier.anime_providers.insert(provider.label.clone());
            }
            if provider.foreign.as_deref() == Some(RUSSIAN_FLAG) {
                classifier.russian_providers.insert(provider.label);
            }
        }
        tracing::debug!(
            "Classified providers: {} anime, {} russian",
            classifier.anime_providers.len(),
            classifier.russian_providers.len()
        );
        classifier
    }

    pub fn is_anime(&self, provider: &str) -> bool {
        self.anime_providers.contains(provider)
    }

    pub fn is_russian(&self, provider: &str) -> bool {
        self.russian_providers.contains(provider)
    }

    pub fn classify(&self, provider: Option<&str>) -> ContentClassification {
        match provider {
            Some(p) if self.is_anime(p) => ContentClassification::Anime,
            Some(p) if self.is_russian(p) => ContentClassification::Russian,
            _ => ContentClassification::General,
        }
    }

    pub fn anime_providers(&self) -> &HashSet<String> {
        &self.anime_providers
    }

    pub fn russian_providers(&self) -> &HashSet<String> {
        &self.russian_providers
    }
}
