use serde::{Deserialize, Serialize};

/// Project record returned by the platform after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedProject {
    pub id: String,
    /// Internal identifier used by platform integrations
    pub api_code: String,
    /// Human-facing project id, e.g. `PRJ_001`
    pub pid: String,
}
