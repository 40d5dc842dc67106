use crate::{CoreError, Result as CoreErrorResult};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Raw action input as supplied by the template.
///
/// Every field is optional at this stage and wrongly typed values read as
/// absent, so any object reaches [`CreateProjectInput::validate`] and the
/// first failing field decides the message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateProjectInput {
    #[serde(deserialize_with = "lenient_text")]
    pub label: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub goal: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub scope: Option<String>,
    /// Anything that is not an integer reads as absent
    #[serde(deserialize_with = "lenient_type_id")]
    pub type_id: Option<i64>,
    #[serde(deserialize_with = "lenient_text")]
    pub estimated_start_date: Option<String>,
    /// Anything but a list of strings reads as absent
    #[serde(deserialize_with = "lenient_tags")]
    pub tags: Option<Vec<String>>,
}

/// Input that passed validation. Immutable from here on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub label: String,
    pub goal: String,
    pub scope: String,
    pub type_id: i64,
    pub start_date: Option<String>,
    pub tags: Vec<String>,
}

impl CreateProjectInput {
    /// Check required fields in order: label, goal, scope, typeId.
    /// The first failure is returned.
    #[track_caller]
    pub fn validate(self) -> CoreErrorResult<NewProject> {
        let label = Self::required_text(self.label, "label")?;
        let goal = Self::required_text(self.goal, "goal")?;
        let scope = Self::required_text(self.scope, "scope")?;

        let type_id = match self.type_id {
            Some(id) if id > 0 => id,
            _ => {
                return Err(CoreError::validation(
                    "\"typeId\" is a required input parameter or has a invalid content",
                ));
            }
        };

        Ok(NewProject {
            label,
            goal,
            scope,
            type_id,
            start_date: self.estimated_start_date,
            tags: self.tags.unwrap_or_default(),
        })
    }

    #[track_caller]
    fn required_text(value: Option<String>, name: &str) -> CoreErrorResult<String> {
        match value {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(CoreError::validation(format!(
                "\"{name}\" is a required input parameter"
            ))),
        }
    }
}

fn lenient_type_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    Ok(value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0)
            .map(|f| f as i64)
    }))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(String::from))
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    Ok(value.as_array().and_then(|items| {
        items
            .iter()
            .map(|item| item.as_str().map(String::from))
            .collect()
    }))
}
