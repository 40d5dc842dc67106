use clap::Subcommand;

#[derive(Subcommand)]
pub enum ActionCommands {
    /// List registered actions
    List,
    /// Print an action's input/output schema
    Schema {
        /// Action ID (defaults to the project creation action)
        id: Option<String>,
    },
    /// Run an action with a raw JSON input
    Run {
        /// Action ID
        id: String,
        /// Input object as JSON
        #[arg(long)]
        input: String,
    },
}
