//! appsec - Conviso AppSecFlow scaffolder actions CLI
//!
//! Runs the same actions a developer portal template would, using the
//! configuration in `.appsec/config.toml` (or `APPSEC_*` environment
//! variables).
//!
//! # Examples
//!
//! ```bash
//! # Create a project
//! appsec project create --label "My Project" --goal my-project --scope main --type-id 1 \
//!     --start-date 2024-01-15 --tag backend --tag api
//!
//! # Inspect the action contract
//! appsec action schema --pretty
//!
//! # Run any registered action with raw JSON input
//! appsec action run convisoappsec:project:create --input '{"label":"x","goal":"x","scope":"x","typeId":1}'
//! ```

mod action_commands;
mod cli;
mod commands;
mod error;
mod logger;
mod project_commands;
mod runtime;


use crate::{
    action_commands::ActionCommands,
    cli::Cli,
    commands::Commands,
    error::{CliError, Result as CliResult},
    runtime::Runtime,
};

use appsec_config::{ConfigReader, ConvisoConfig, LoggingConfig};

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::debug;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // .env is optional
    dotenvy::dotenv().ok();

    let result = run(&cli).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> CliResult<Value> {
    let reader = match cli.config_dir {
        Some(ref dir) => ConfigReader::load_from(dir)?,
        None => ConfigReader::load()?,
    };

    let logging = LoggingConfig::from_reader(&reader)?;
    logger::initialize(
        logging.level,
        logging.file.as_ref().map(PathBuf::from),
        logging.colored,
    )?;

    let config = Arc::new(reader);
    let runtime = Runtime::new(config.clone())?;

    match cli.command {
        Commands::Project { ref action } => {
            log_conviso_config(&config);
            let outputs = runtime
                .run(&runtime.create_project_id, action.to_input())
                .await?;
            Ok(Value::Object(outputs))
        }

        Commands::Action { ref action } => match action {
            ActionCommands::List => Ok(runtime.list()),
            ActionCommands::Schema { id } => runtime.schema(id.as_deref()),
            ActionCommands::Run { id, input } => {
                let input: Value = serde_json::from_str(input)
                    .map_err(|source| CliError::InvalidInput { source })?;
                let outputs = runtime.run(id, input).await?;
                Ok(Value::Object(outputs))
            }
        },
    }
}

/// Log where the action will connect, when the connection is configured.
///
/// Problems are left for the action itself to report, after it has
/// validated its input.
fn log_conviso_config(config: &ConfigReader) {
    match ConvisoConfig::from_reader(config) {
        Ok(conviso) => conviso.log_summary(),
        Err(e) => debug!("Conviso configuration not usable yet: {e}"),
    }
}
