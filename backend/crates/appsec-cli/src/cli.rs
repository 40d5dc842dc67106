use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "appsec")]
#[command(about = "Run Conviso AppSecFlow scaffolder actions from the command line")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Directory containing config.toml (defaults to APPSEC_CONFIG_DIR or ./.appsec)
    #[arg(long, global = true)]
    pub(crate) config_dir: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
