mod edge_cases;

use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory, point APPSEC_CONFIG_DIR at it and clear
/// every override so the host environment cannot leak into the test.
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let guards = vec![
        EnvGuard::set("APPSEC_CONFIG_DIR", temp.path().to_str().unwrap()),
        EnvGuard::remove("APPSEC_CONVISO_BASE_URL"),
        EnvGuard::remove("APPSEC_CONVISO_API_KEY"),
        EnvGuard::remove("APPSEC_CONVISO_COMPANY_ID"),
        EnvGuard::remove("APPSEC_CONVISO_ACTION_ID"),
        EnvGuard::remove("APPSEC_LOG_LEVEL"),
        EnvGuard::remove("APPSEC_LOG_COLORED"),
        EnvGuard::remove("APPSEC_LOG_FILE"),
    ];
    (temp, guards)
}

/// Write `config.toml` into the temp config directory
pub(crate) fn write_config(temp: &TempDir, contents: &str) {
    std::fs::write(temp.path().join("config.toml"), contents).unwrap();
}
