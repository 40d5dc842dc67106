use crate::{CoreError, Result as CoreErrorResult, TemplateAction};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::debug;

/// The set of actions a host exposes, keyed by action id.
#[derive(Default, Clone)]
pub struct ActionRegistry {
    actions: Vec<Arc<dyn TemplateAction>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action. Ids must be unique.
    #[track_caller]
    pub fn register(&mut self, action: Arc<dyn TemplateAction>) -> CoreErrorResult<()> {
        if self.actions.iter().any(|a| a.id() == action.id()) {
            return Err(CoreError::DuplicateAction {
                id: action.id().to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        debug!("Registered action {}", action.id());
        self.actions.push(action);
        Ok(())
    }

    #[track_caller]
    pub fn get(&self, id: &str) -> CoreErrorResult<Arc<dyn TemplateAction>> {
        self.actions
            .iter()
            .find(|a| a.id() == id)
            .cloned()
            .ok_or_else(|| CoreError::UnknownAction {
                id: id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Actions in registration order
    pub fn actions(&self) -> impl Iterator<Item = &Arc<dyn TemplateAction>> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
