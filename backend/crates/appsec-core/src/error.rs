use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// Input failed a business rule; the message is shown to the user verbatim
    #[error("{message}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid input: {message} {location}")]
    InvalidInput {
        message: String,
        location: ErrorLocation,
    },

    #[error("Action already registered: {id} {location}")]
    DuplicateAction { id: String, location: ErrorLocation },

    #[error("Unknown action: {id} {location}")]
    UnknownAction { id: String, location: ErrorLocation },
}

impl CoreError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        CoreError::InvalidInput {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
