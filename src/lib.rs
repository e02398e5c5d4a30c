pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::TomlConfig;

pub use crate::adapters::{
    GearTitleParser, HttpTrackerSource, InMemoryTorrentStore, MagnetUriCodec,
    StaticProviderRegistry,
};
pub use crate::core::{
    context::TrackerContext, magnet::MagnetBuilder, refresher::TrackerRefresher,
    scheduler::RefreshScheduler, sources::SourceEnricher, store::TrackerListStore,
};
pub use domain::model::{ContentType, ProviderEntry, StreamDescriptor, TorrentRecord};
pub use utils::error::{Result, TrackerError};
