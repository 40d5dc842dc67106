use clap::Subcommand;
use serde_json::{Value, json};

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Create a project in AppSecFlow
    Create {
        /// Project name
        #[arg(long)]
        label: String,

        /// Project key / goal
        #[arg(long)]
        goal: String,

        /// Project scope
        #[arg(long)]
        scope: String,

        /// Project type ID
        #[arg(long, allow_negative_numbers = true)]
        type_id: i64,

        /// Estimated analysis start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<String>,

        /// Project tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
}

impl ProjectCommands {
    /// Action input equivalent to what a template would pass
    pub(crate) fn to_input(&self) -> Value {
        match self {
            ProjectCommands::Create {
                label,
                goal,
                scope,
                type_id,
                start_date,
                tags,
            } => {
                let mut input = json!({
                    "label": label,
                    "goal": goal,
                    "scope": scope,
                    "typeId": type_id,
                    "tags": tags,
                });
                if let Some(date) = start_date {
                    input["estimatedStartDate"] = json!(date);
                }
                input
            }
        }
    }
}
