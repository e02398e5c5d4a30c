use std::sync::OnceLock;

use regex::Regex;

use crate::domain::ports::TitleParser;

static PROVIDER_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Reads the provider from stream titles such as
/// `"Movie.2020.1080p\n👤 12 💾 1.4 GB ⚙️ Rutor"`: the last word on the `⚙` line.
#[derive(Debug, Clone, Copy, Default)]
pub struct GearTitleParser;

impl TitleParser for GearTitleParser {
    fn extract_provider(&self, title: &str) -> Option<String> {
        let pattern = PROVIDER_PATTERN
            .get_or_init(|| Regex::new(r"⚙.* ([^ \n]+)").expect("provider pattern is valid"));
        pattern
            .captures(title)
            .and_then(|caps| caps.get(1))
            .map(|provider| provider.as_str().to_string())
    }
}
