//! spo - backlog export CLI
//!
//! Pushes a generated Epic/Feature/Story backlog into an Azure DevOps project.
//!
//! # Examples
//!
//! ```bash
//! # Check credentials (token from SPO_ACCESS_TOKEN)
//! spo test-connection --org-url https://dev.azure.com/contoso --project Shop
//!
//! # Inspect a backlog without touching Azure DevOps
//! spo check --backlog backlog.json --pretty
//!
//! # Create every work item and link dependencies
//! spo export --backlog backlog.json
//! ```

use spo_cli::{Cli, initialize_logger, load_config, run};

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Initialize logger (before any other logging)
    if let Err(e) = initialize_logger(
        config.logging.level,
        config.logging.file.as_deref().map(Path::new),
        config.logging.colored,
    ) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Starting spo v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    match run(&cli.command, &config).await {
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
            error!("{e}");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
