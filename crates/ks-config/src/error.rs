use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("JSON document error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// Create a config error
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Config",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a document error (structured JSON input that cannot be used)
    #[track_caller]
    pub fn document<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Document",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert a serde_json error into a ConfigError
    #[track_caller]
    pub fn from_json(source: serde_json::Error) -> Self {
        ConfigError::Json {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
