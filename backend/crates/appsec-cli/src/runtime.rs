use crate::error::{CliError, Result as CliResult};

use appsec_action::CreateProjectAction;
use appsec_config::ConfigReader;
use appsec_core::{ActionContext, ActionRegistry, TemplateAction};

use std::sync::Arc;

use log::info;
use serde_json::{Map, Value, json};

/// Registered actions plus the id the project creation action runs under
pub(crate) struct Runtime {
    pub(crate) registry: ActionRegistry,
    pub(crate) create_project_id: String,
}

impl Runtime {
    /// Register every action this binary ships.
    pub(crate) fn new(config: Arc<ConfigReader>) -> CliResult<Self> {
        let mut registry = ActionRegistry::new();

        let create_project = Arc::new(CreateProjectAction::new(config)?);
        let create_project_id = create_project.id().to_string();
        registry.register(create_project)?;

        Ok(Self {
            registry,
            create_project_id,
        })
    }

    /// Run an action by id and return its outputs
    pub(crate) async fn run(&self, id: &str, input: Value) -> CliResult<Map<String, Value>> {
        let action = self.registry.get(id)?;
        let mut ctx = ActionContext::new(input);

        info!("Running action {id}");
        action.handler(&mut ctx).await.map_err(CliError::Handler)?;

        Ok(ctx.into_outputs())
    }

    pub(crate) fn list(&self) -> Value {
        Value::Array(
            self.registry
                .actions()
                .map(|a| json!({ "id": a.id(), "description": a.description() }))
                .collect(),
        )
    }

    pub(crate) fn schema(&self, id: Option<&str>) -> CliResult<Value> {
        let action = self.registry.get(id.unwrap_or(&self.create_project_id))?;

        Ok(json!({
            "id": action.id(),
            "description": action.description(),
            "schema": action.schema(),
        }))
    }
}
