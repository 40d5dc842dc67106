use crate::{ActionContext, ActionSchema};

use async_trait::async_trait;

/// Error returned by a handler. Actions keep their own typed error and box
/// it at this boundary; the host only needs the message.
pub type ActionHandlerError = Box<dyn std::error::Error + Send + Sync>;

/// A unit of work a scaffolder host can invoke by id.
#[async_trait]
pub trait TemplateAction: Send + Sync {
    /// Identifier templates reference, e.g. `convisoappsec:project:create`
    fn id(&self) -> &str;

    fn description(&self) -> &str;

    fn schema(&self) -> &ActionSchema;

    /// Run the action. Implementations read `ctx.input()`, report through
    /// `ctx.output` and `ctx.info`, and must not emit outputs on failure.
    async fn handler(&self, ctx: &mut ActionContext) -> Result<(), ActionHandlerError>;
}
