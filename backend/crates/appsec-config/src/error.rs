use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    /// A required key is absent from every configuration source
    #[error("Missing required config value at '{key}'")]
    MissingValue { key: String, location: ErrorLocation },

    /// A key is present but holds a value of the wrong kind
    #[error("Invalid type in config for key '{key}', got {actual}, wanted {expected}")]
    InvalidType {
        key: String,
        actual: &'static str,
        expected: &'static str,
        location: ErrorLocation,
    },

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
}

impl ConfigError {
    #[track_caller]
    pub fn missing<S: Into<String>>(key: S) -> Self {
        ConfigError::MissingValue {
            key: key.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_type<S: Into<String>>(
        key: S,
        actual: &'static str,
        expected: &'static str,
    ) -> Self {
        ConfigError::InvalidType {
            key: key.into(),
            actual,
            expected,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a config error
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Config",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a serde error
    #[track_caller]
    pub fn serde<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Serde",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True when the error means "key not configured" rather than "configured badly"
    pub fn is_missing_value(&self) -> bool {
        matches!(self, ConfigError::MissingValue { .. })
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
