use crate::core::classifier::RUSSIAN_FLAG;
use crate::domain::model::ProviderEntry;
use crate::domain::ports::ProviderRegistry;

/// Provider list fixed for the life of the process.
#[derive(Debug, Clone)]
pub struct StaticProviderRegistry {
    entries: Vec<ProviderEntry>,
}

impl StaticProviderRegistry {
    pub fn new(entries: Vec<ProviderEntry>) -> Self {
        Self { entries }
    }

    /// Providers known to the indexer out of the box.
    pub fn builtin() -> Self {
        Self::new(vec![
            ProviderEntry::new("YTS"),
            ProviderEntry::new("EZTV"),
            ProviderEntry::new("RARBG"),
            ProviderEntry::new("1337x"),
            ProviderEntry::new("ThePirateBay"),
            ProviderEntry::new("KickassTorrents"),
            ProviderEntry::new("TorrentGalaxy"),
            ProviderEntry::new("MagnetDL"),
            ProviderEntry::anime("HorribleSubs"),
            ProviderEntry::anime("NyaaSi"),
            ProviderEntry::anime("TokyoTosho"),
            ProviderEntry::anime("AniDex"),
            ProviderEntry::foreign("Rutor", RUSSIAN_FLAG),
            ProviderEntry::foreign("Rutracker", RUSSIAN_FLAG),
            ProviderEntry::foreign("Comando", "🇵🇹"),
            ProviderEntry::foreign("BluDV", "🇵🇹"),
            ProviderEntry::foreign("Torrent9", "🇫🇷"),
            ProviderEntry::foreign("ilCorSaRoNeRo", "🇮🇹"),
            ProviderEntry::foreign("MejorTorrent", "🇪🇸"),
            ProviderEntry::foreign("Wolfmax4k", "🇪🇸"),
            ProviderEntry::foreign("Cinecalidad", "🇲🇽"),
        ])
    }
}

impl Default for StaticProviderRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ProviderRegistry for StaticProviderRegistry {
    fn providers(&self) -> Vec<ProviderEntry> {
        self.entries.clone()
    }
}
