use appsec_action::ActionError;
use appsec_config::ConfigError;
use appsec_core::{ActionHandlerError, CoreError};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Action(#[from] ActionError),

    /// Failure reported by an action handler
    #[error("{0}")]
    Handler(ActionHandlerError),

    #[error("Invalid --input JSON: {source}")]
    InvalidInput {
        #[source]
        source: serde_json::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, CliError>;
