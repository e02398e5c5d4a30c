use crate::domain::model::{MagnetFields, ProviderEntry, TorrentRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Remote "best trackers" document.
pub trait TrackerListSource: Send + Sync {
    /// One fetch attempt returning the raw body.
    fn fetch(&self) -> impl std::future::Future<Output = Result<String>> + Send;
}

impl<T: TrackerListSource> TrackerListSource for Arc<T> {
    fn fetch(&self) -> impl std::future::Future<Output = Result<String>> + Send {
        (**self).fetch()
    }
}

#[async_trait]
pub trait TorrentStore: Send + Sync {
    async fn get_torrent(&self, info_hash: &str) -> Result<TorrentRecord>;
}

pub trait ProviderRegistry: Send + Sync {
    fn providers(&self) -> Vec<ProviderEntry>;
}

pub trait TitleParser: Send + Sync {
    fn extract_provider(&self, title: &str) -> Option<String>;
}

pub trait MagnetCodec: Send + Sync {
    fn encode(&self, magnet: &MagnetFields) -> String;
}
