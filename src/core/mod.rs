pub mod classifier;
pub mod context;
pub mod magnet;
pub mod refresher;
pub mod scheduler;
pub mod sources;
pub mod store;
pub mod trackers;

pub use crate::domain::model::{StreamDescriptor, TorrentRecord, TrackerSet, TrackerSnapshot};
pub use crate::domain::ports::{
    MagnetCodec, ProviderRegistry, TitleParser, TorrentStore, TrackerListSource,
};
pub use crate::utils::error::Result;
