// Adapters layer: concrete implementations of the domain ports.

pub mod codec;
pub mod http;
pub mod registry;
pub mod title;
pub mod torrent_store;
pub mod user_agent;

pub use codec::MagnetUriCodec;
pub use http::HttpTrackerSource;
pub use registry::StaticProviderRegistry;
pub use title::GearTitleParser;
pub use torrent_store::InMemoryTorrentStore;
