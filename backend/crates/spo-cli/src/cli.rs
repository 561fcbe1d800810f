use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "spo")]
#[command(about = "Export generated Epic/Feature/Story backlogs to Azure DevOps")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Azure DevOps organization URL (overrides config and SPO_ORG_URL)
    #[arg(long, global = true)]
    pub org_url: Option<String>,

    /// Azure DevOps project name (overrides config and SPO_PROJECT)
    #[arg(long, global = true)]
    pub project: Option<String>,

    /// Directory holding config.toml (defaults to SPO_CONFIG_DIR or ./.spo)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
