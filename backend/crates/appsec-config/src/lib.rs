mod config_reader;
mod conviso_config;
mod error;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use config_reader::ConfigReader;
pub use conviso_config::ConvisoConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

/// Config keys read by the project creation action
pub const KEY_BASE_URL: &str = "conviso.baseUrl";
pub const KEY_COMPANY_ID: &str = "conviso.companyId";
pub const KEY_API_KEY: &str = "conviso.x-api-key";
pub const KEY_ACTION_ID: &str = "conviso.actionId";

const CONFIG_DIR_ENV: &str = "APPSEC_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".appsec";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
