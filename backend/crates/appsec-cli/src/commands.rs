use crate::{action_commands::ActionCommands, project_commands::ProjectCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// AppSecFlow project operations
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },

    /// Inspect and run registered scaffolder actions
    Action {
        #[command(subcommand)]
        action: ActionCommands,
    },
}
