use appsec_config::ConfigError;
use appsec_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by the project creation action.
///
/// `Display` is the message the scaffolder shows to the user.
#[derive(Error, Debug)]
pub enum ActionError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Non-2xx HTTP response
    #[error("Failed to create project, status {status} - {message}")]
    HttpStatus {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    /// 2xx response whose GraphQL payload reports an error
    #[error("Failed to create project - {message}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid GraphQL URL {url}: {source} {location}")]
    InvalidUrl {
        url: String,
        location: ErrorLocation,
        #[source]
        source: url::ParseError,
    },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ActionError {
    #[track_caller]
    pub fn http_status<S: Into<String>>(status: u16, message: S) -> Self {
        ActionError::HttpStatus {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected<S: Into<String>>(message: S) -> Self {
        ActionError::Rejected {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ActionError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ActionError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<reqwest::Error> for ActionError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ActionError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ActionError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ActionError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ActionError>;
