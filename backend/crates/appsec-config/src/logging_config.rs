use crate::{ConfigErrorResult, ConfigReader, DEFAULT_LOG_COLORED, DEFAULT_LOG_LEVEL, LogLevel};

use serde::Deserialize;

/// `[logging]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colored output on stderr (ignored when logging to a file)
    pub colored: bool,
    /// Log file path; None = stderr
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            colored: DEFAULT_LOG_COLORED,
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn from_reader(reader: &ConfigReader) -> ConfigErrorResult<Self> {
        reader.section("logging")
    }
}
