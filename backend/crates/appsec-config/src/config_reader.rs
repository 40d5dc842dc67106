use crate::{CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR};

use std::path::{Path, PathBuf};

use log::debug;
use serde::de::DeserializeOwned;
use toml::{Table, Value};

#[derive(Debug, Clone, Copy)]
enum EnvKind {
    String,
    Number,
    Bool,
}

/// Environment overrides applied on top of the TOML file
const ENV_OVERRIDES: &[(&str, &str, EnvKind)] = &[
    ("APPSEC_CONVISO_BASE_URL", crate::KEY_BASE_URL, EnvKind::String),
    ("APPSEC_CONVISO_API_KEY", crate::KEY_API_KEY, EnvKind::String),
    ("APPSEC_CONVISO_COMPANY_ID", crate::KEY_COMPANY_ID, EnvKind::Number),
    ("APPSEC_CONVISO_ACTION_ID", crate::KEY_ACTION_ID, EnvKind::String),
    ("APPSEC_LOG_LEVEL", "logging.level", EnvKind::String),
    ("APPSEC_LOG_COLORED", "logging.colored", EnvKind::Bool),
    ("APPSEC_LOG_FILE", "logging.file", EnvKind::String),
];

/// Read-only view over layered configuration, addressed by dotted key paths
/// such as `conviso.baseUrl`.
///
/// Required lookups fail with [`ConfigError::MissingValue`] so callers can
/// tell "not configured" apart from "configured with the wrong type".
#[derive(Debug, Clone, Default)]
pub struct ConfigReader {
    root: Table,
}

impl ConfigReader {
    pub fn new(root: Table) -> Self {
        Self { root }
    }

    /// Parse a TOML document without touching the filesystem or environment.
    pub fn from_toml_str(contents: &str) -> ConfigErrorResult<Self> {
        let root = contents
            .parse::<Table>()
            .map_err(|e| ConfigError::serde(e.to_string()))?;
        Ok(Self { root })
    }

    /// Load config from the default location.
    ///
    /// Loading order:
    /// 1. Check for APPSEC_CONFIG_DIR env var, else use ./.appsec/
    /// 2. Load config.toml if it exists, else start empty
    /// 3. Apply APPSEC_* environment variable overrides
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from(&config_dir)
    }

    /// Load `config.toml` from an explicit directory, then apply env overrides.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut reader = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            debug!("No config file at {}, using empty config", config_path.display());
            Self::default()
        };

        reader.apply_env_overrides();

        Ok(reader)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let root = toml::from_str::<Table>(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Self { root })
    }

    /// Get the config directory.
    /// Priority: APPSEC_CONFIG_DIR env var > ./.appsec/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Required string value.
    #[track_caller]
    pub fn get_string(&self, key: &str) -> ConfigErrorResult<String> {
        match self.get_optional_string(key)? {
            Some(value) => Ok(value),
            None => Err(ConfigError::missing(key)),
        }
    }

    #[track_caller]
    pub fn get_optional_string(&self, key: &str) -> ConfigErrorResult<Option<String>> {
        match self.lookup(key) {
            None => Ok(None),
            Some(Value::String(s)) if s.is_empty() => {
                Err(ConfigError::invalid_type(key, "empty string", "string"))
            }
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(ConfigError::invalid_type(key, other.type_str(), "string")),
        }
    }

    /// Required numeric value. Integral floats and numeric strings are accepted.
    #[track_caller]
    pub fn get_number(&self, key: &str) -> ConfigErrorResult<i64> {
        match self.get_optional_number(key)? {
            Some(value) => Ok(value),
            None => Err(ConfigError::missing(key)),
        }
    }

    #[track_caller]
    pub fn get_optional_number(&self, key: &str) -> ConfigErrorResult<Option<i64>> {
        match self.lookup(key) {
            None => Ok(None),
            Some(Value::Integer(n)) => Ok(Some(*n)),
            Some(Value::Float(f)) if f.fract() == 0.0 => Ok(Some(*f as i64)),
            Some(Value::String(s)) => s
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| ConfigError::invalid_type(key, "string", "number")),
            Some(other) => Err(ConfigError::invalid_type(key, other.type_str(), "number")),
        }
    }

    /// Deserialize a whole table, falling back to `T::default()` when absent.
    pub fn section<T: DeserializeOwned + Default>(&self, key: &str) -> ConfigErrorResult<T> {
        match self.lookup(key) {
            None => Ok(T::default()),
            Some(value) => value
                .clone()
                .try_into()
                .map_err(|e: toml::de::Error| ConfigError::serde(format!("[{key}] {e}"))),
        }
    }

    /// Set a value at a dotted key path, creating intermediate tables.
    pub fn set(&mut self, key: &str, value: Value) {
        let mut parts = key.split('.').peekable();
        let mut table = &mut self.root;

        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                table.insert(part.to_string(), value);
                return;
            }

            let entry = table
                .entry(part.to_string())
                .or_insert_with(|| Value::Table(Table::new()));
            if !entry.is_table() {
                *entry = Value::Table(Table::new());
            }
            table = match entry {
                Value::Table(inner) => inner,
                _ => return,
            };
        }
    }

    pub fn has(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        let mut parts = key.split('.');
        let first = parts.next()?;
        let mut current = self.root.get(first)?;

        for part in parts {
            current = current.as_table()?.get(part)?;
        }

        Some(current)
    }

    fn apply_env_overrides(&mut self) {
        for (var_name, key, kind) in ENV_OVERRIDES {
            if let Ok(val) = std::env::var(var_name) {
                debug!("Applying {var_name} override to '{key}'");
                self.set(key, Self::env_value(&val, *kind));
            }
        }
    }

    /// Unparseable numbers stay strings so the typed getter reports them.
    fn env_value(raw: &str, kind: EnvKind) -> Value {
        match kind {
            EnvKind::String => Value::String(raw.to_string()),
            EnvKind::Number => raw
                .parse::<i64>()
                .map(Value::Integer)
                .unwrap_or_else(|_| Value::String(raw.to_string())),
            // Accepts "true"/"1"
            EnvKind::Bool => Value::Boolean(raw == "true" || raw == "1"),
        }
    }
}
