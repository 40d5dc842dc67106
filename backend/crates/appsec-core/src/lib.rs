pub mod action;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use action::action_context::ActionContext;
pub use action::action_registry::ActionRegistry;
pub use action::action_schema::ActionSchema;
pub use action::template_action::{ActionHandlerError, TemplateAction};
pub use error::{CoreError, Result};
pub use models::create_project_input::{CreateProjectInput, NewProject};
pub use models::created_project::CreatedProject;
