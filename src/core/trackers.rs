//! Static tracker lists and the order-preserving merge used for every tracker set.

use std::collections::HashSet;

use crate::domain::model::{TrackerSet, TrackerSnapshot};

pub const BEST_TRACKERS_URL: &str =
    "https://raw.githubusercontent.com/ngosang/trackerslist/master/trackers_best.txt";

pub const DEFAULT_TRACKERS: &[&str] = &[
    "udp://47.ip-51-68-199.eu:6969/announce",
    "udp://9.rarbg.me:2940",
    "udp://9.rarbg.to:2820",
    "udp://exodus.desync.com:6969/announce",
    "udp://explodie.org:6969/announce",
    "udp://ipv4.tracker.harry.lu:80/announce",
    "udp://open.stealth.si:80/announce",
    "udp://opentor.org:2710/announce",
    "udp://opentracker.i2p.rocks:6969/announce",
    "udp://retracker.lanta-net.ru:2710/announce",
    "udp://tracker.cyberia.is:6969/announce",
    "udp://tracker.dler.org:6969/announce",
    "udp://tracker.ds.is:6969/announce",
    "udp://tracker.internetwarriors.net:1337",
    "udp://tracker.openbittorrent.com:6969/announce",
    "udp://tracker.opentrackr.org:1337/announce",
    "udp://tracker.tiny-vps.com:6969/announce",
    "udp://tracker.torrent.eu.org:451/announce",
    "udp://valakas.rollo.dnsabr.com:2710/announce",
    "udp://www.torrent.eu.org:451/announce",
    "udp://tracker.openbittorrent.com:80",
    "udp://tracker.publicbt.com:80",
    "udp://tracker.istole.it:80",
    "udp://tracker.btzoo.eu:80/announce",
    "http://opensharing.org:2710/announce",
    "udp://open.demonii.com:1337/announce",
    "http://announce.torrentsmd.com:8080/announce.php",
    "http://announce.torrentsmd.com:6969/announce",
    "http://bt.careland.com.cn:6969/announce",
    "http://i.bandito.org/announce",
    "http://bttrack.9you.com/announce",
    "udp://tracker.openbittorrent.com:80/announce",
    "https://r0k3t.li/rss/5.01046fce01d3986161d0b5ed6d0ebc96",
    "udp://open.tracker.cl:1337/announce",
];

pub const ANIME_TRACKERS: &[&str] = &[
    "http://nyaa.tracker.wf:7777/announce",
    "http://anidex.moe:6969/announce",
    "http://tracker.anirena.com:80/announce",
    "udp://tracker.uw0.xyz:6969/announce",
    "http://share.camoe.cn:8080/announce",
    "http://t.nyaatracker.com:80/announce",
];

// Some of these trackers only serve peers that seeded long enough, so russian
// content also leans on DHT.
pub const RUSSIAN_TRACKERS: &[&str] = &[
    "udp://opentor.net:6969",
    "http://bt.t-ru.org/ann?magnet",
    "http://bt2.t-ru.org/ann?magnet",
    "http://bt3.t-ru.org/ann?magnet",
    "http://bt4.t-ru.org/ann?magnet",
];

/// Drops duplicates, keeping each value at its first position.
pub fn unique<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for item in items {
        let item = item.into();
        if seen.insert(item.clone()) {
            result.push(item);
        }
    }
    result
}

fn merge_with_static(best: &[String], category: &[&str]) -> TrackerSet {
    unique(
        best.iter()
            .map(String::as_str)
            .chain(DEFAULT_TRACKERS.iter().copied())
            .chain(category.iter().copied()),
    )
}

impl TrackerSnapshot {
    /// Derives every list from `best` in one go.
    pub fn from_best(best: TrackerSet, version: u64) -> Self {
        let all_anime = merge_with_static(&best, ANIME_TRACKERS);
        let all_russian = merge_with_static(&best, RUSSIAN_TRACKERS);
        Self {
            version,
            refreshed_at: Some(chrono::Utc::now()),
            best,
            all_anime,
            all_russian,
        }
    }
}
