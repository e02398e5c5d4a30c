use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {status}")]
    HttpStatusError { status: u16 },

    #[error("Failed retrieving best trackers after {attempts} attempts: {source}")]
    NetworkError {
        attempts: u32,
        #[source]
        source: Box<TrackerError>,
    },

    #[error("Torrent metadata unavailable for {info_hash}: {message}")]
    MetadataLookupError { info_hash: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl TrackerError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TrackerError::HttpError(_) | TrackerError::HttpStatusError { .. } => {
                "Check network connectivity and the tracker list URL"
            }
            TrackerError::NetworkError { .. } => {
                "The previous tracker lists stay in use; the next refresh will try again"
            }
            TrackerError::MetadataLookupError { .. } => {
                "Make sure the torrent metadata store contains the info hash"
            }
            TrackerError::IoError(_) => "Check that the file exists and is readable",
            TrackerError::SerializationError(_) => "Check that the input is valid JSON",
            TrackerError::ConfigError { .. } | TrackerError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
