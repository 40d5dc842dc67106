use crate::{
    ConfigError, ConfigErrorResult, ConfigReader, KEY_ACTION_ID, KEY_API_KEY, KEY_BASE_URL,
    KEY_COMPANY_ID,
};

use log::info;
use url::Url;

/// Connection settings for the Conviso AppSecFlow platform.
#[derive(Clone)]
pub struct ConvisoConfig {
    /// Platform root, without a trailing slash
    pub base_url: String,
    /// Value of the `x-api-key` header
    pub api_key: String,
    pub company_id: i64,
}

impl ConvisoConfig {
    /// Read the three required keys in the order baseUrl, companyId, x-api-key.
    ///
    /// The first absent key wins, so a reader with no `conviso` section at all
    /// reports `conviso.baseUrl`.
    #[track_caller]
    pub fn from_reader(reader: &ConfigReader) -> ConfigErrorResult<Self> {
        let base_url = reader.get_string(KEY_BASE_URL)?;
        let company_id = reader.get_number(KEY_COMPANY_ID)?;
        let api_key = reader.get_string(KEY_API_KEY)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            company_id,
        })
    }

    /// Action identifier override, if the deployment configures one.
    pub fn action_id(reader: &ConfigReader) -> ConfigErrorResult<Option<String>> {
        reader.get_optional_string(KEY_ACTION_ID)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            ConfigError::config(format!("{KEY_BASE_URL} is not a valid URL: {e}"))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::config(format!(
                "{KEY_BASE_URL} must use http or https, got {}",
                url.scheme()
            )));
        }

        if self.company_id <= 0 {
            return Err(ConfigError::config(format!(
                "{KEY_COMPANY_ID} must be positive, got {}",
                self.company_id
            )));
        }

        Ok(())
    }

    /// GraphQL endpoint for this platform
    pub fn graphql_url(&self) -> String {
        format!("{}/graphql", self.base_url)
    }

    /// Browser URL of a project on the platform
    pub fn project_url(&self, project_id: &str) -> String {
        format!(
            "{}/scopes/{}/projects/{}",
            self.base_url, self.company_id, project_id
        )
    }

    /// Log configuration summary (NEVER logs the API key).
    pub fn log_summary(&self) {
        info!("Conviso configuration loaded:");
        info!("  base_url: {}", self.base_url);
        info!("  company_id: {}", self.company_id);
        info!(
            "  api_key: {}",
            if self.api_key.is_empty() {
                "missing"
            } else {
                "set"
            }
        );
    }
}

impl std::fmt::Debug for ConvisoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConvisoConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("company_id", &self.company_id)
            .finish()
    }
}
