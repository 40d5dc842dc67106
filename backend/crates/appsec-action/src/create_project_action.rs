use crate::{ActionErrorResult, AppSecFlowClient};

use appsec_config::{ConfigReader, ConvisoConfig};
use appsec_core::{
    ActionContext, ActionHandlerError, ActionSchema, CreateProjectInput, CreatedProject,
    TemplateAction,
};

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use reqwest::Client as ReqwestClient;
use serde_json::json;

pub const DEFAULT_ACTION_ID: &str = "convisoappsec:project:create";
pub const ACTION_DESCRIPTION: &str = "Creates a new project in AppSecFlow";

pub const OUTPUT_PROJECT_URL: &str = "projectUrl";
pub const OUTPUT_PROJECT_ID: &str = "projectId";
pub const OUTPUT_PROJECT_API_CODE: &str = "projectApiCode";
pub const OUTPUT_PROJECT_PID: &str = "projectPid";

/// Scaffolder action creating a project on Conviso AppSecFlow.
///
/// Configuration is read from the shared [`ConfigReader`] on every
/// invocation, so a reader missing `conviso.*` keys only fails when the
/// action actually runs.
pub struct CreateProjectAction {
    id: String,
    config: Arc<ConfigReader>,
    schema: ActionSchema,
    http: ReqwestClient,
}

impl CreateProjectAction {
    /// Build the action, taking its id from `conviso.actionId` when set.
    pub fn new(config: Arc<ConfigReader>) -> ActionErrorResult<Self> {
        let id = ConvisoConfig::action_id(&config)?
            .unwrap_or_else(|| DEFAULT_ACTION_ID.to_string());
        Ok(Self::with_id(id, config))
    }

    pub fn with_id<S: Into<String>>(id: S, config: Arc<ConfigReader>) -> Self {
        Self {
            id: id.into(),
            config,
            schema: create_project_schema(),
            http: ReqwestClient::new(),
        }
    }

    /// Validate input, then configuration, send the mutation and emit outputs.
    ///
    /// Outputs are only written after the platform confirmed the project, so
    /// a failed run leaves the context untouched.
    pub async fn run(&self, ctx: &mut ActionContext) -> ActionErrorResult<CreatedProject> {
        let input: CreateProjectInput = ctx.parse_input()?;
        let project = input.validate()?;

        let conviso = ConvisoConfig::from_reader(&self.config)?;
        conviso.validate()?;
        let client = AppSecFlowClient::with_http_client(&conviso, self.http.clone())?;

        let created = client.create_project(conviso.company_id, &project).await?;

        let project_url = conviso.project_url(&created.id);
        ctx.info(format!(
            "New project has been created with id {} at {} .",
            created.id, project_url
        ));

        ctx.output(OUTPUT_PROJECT_URL, project_url);
        ctx.output(OUTPUT_PROJECT_ID, created.id.clone());
        ctx.output(OUTPUT_PROJECT_API_CODE, created.api_code.clone());
        ctx.output(OUTPUT_PROJECT_PID, created.pid.clone());

        Ok(created)
    }
}

#[async_trait]
impl TemplateAction for CreateProjectAction {
    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> &str {
        ACTION_DESCRIPTION
    }

    fn schema(&self) -> &ActionSchema {
        &self.schema
    }

    async fn handler(&self, ctx: &mut ActionContext) -> Result<(), ActionHandlerError> {
        debug!("Running action {}", self.id);
        self.run(ctx).await?;
        Ok(())
    }
}

fn create_project_schema() -> ActionSchema {
    ActionSchema::new(
        json!({
            "required": ["label", "goal", "scope", "typeId"],
            "type": "object",
            "properties": {
                "label": {
                    "type": "string",
                    "title": "Name",
                    "description": "Name of the project to be created in AppSecFlow. Example: \"My Project\""
                },
                "goal": {
                    "type": "string",
                    "title": "Goal",
                    "description": "Key of the project to identify the project in AppSecFlow. Example: \"my-project\""
                },
                "scope": {
                    "type": "string",
                    "title": "Scope",
                    "description": "Scope of the project. If not provided, the default main branch name will be used"
                },
                "typeId": {
                    "type": "number",
                    "title": "Type ID",
                    "description": "Project type identifier in AppSecFlow"
                },
                "estimatedStartDate": {
                    "type": "string",
                    "title": "Start Date",
                    "description": "Estimated date when analysis will start"
                },
                "tags": {
                    "type": "array",
                    "items": { "type": "string" },
                    "title": "Project Tags",
                    "description": "Tags attached to the project"
                }
            }
        }),
        json!({
            "type": "object",
            "properties": {
                "projectId": {
                    "title": "AppSecFlow Project ID",
                    "type": "string",
                    "description": "ID of the project created by this action"
                },
                "projectApiCode": {
                    "title": "Project API code",
                    "type": "string",
                    "description": "Internal identificator"
                },
                "projectPid": {
                    "title": "Project PID",
                    "type": "string",
                    "description": "Internal project identification in alpha format"
                },
                "projectUrl": {
                    "title": "Project URL",
                    "type": "string",
                    "description": "Link to the project in AppSecFlow"
                }
            }
        }),
    )
}
