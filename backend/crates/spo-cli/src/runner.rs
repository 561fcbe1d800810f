use crate::{Cli, CliError, CliResult, Commands};

use spo_ado::{AdoClient, AdoClientOptions};
use spo_config::Config;
use spo_core::BacklogGraph;
use spo_export::{ExportSettings, NoProgress, export_backlog};

use std::path::Path;

use log::{info, warn};
use serde_json::{Value, json};

/// Load config from `--config-dir` (or the default location), apply the
/// command-line overrides and validate.
pub fn load_config(cli: &Cli) -> CliResult<Config> {
    let mut config = match &cli.config_dir {
        Some(dir) => Config::load_from(dir)?,
        None => Config::load()?,
    };

    if let Some(org_url) = &cli.org_url {
        config.tracker.organization_url = Some(org_url.clone());
    }
    if let Some(project) = &cli.project {
        config.tracker.project = Some(project.clone());
    }

    config.validate()?;
    Ok(config)
}

/// Read a backlog JSON file, or stdin when `path` is `-`.
pub fn load_backlog(path: &Path) -> CliResult<BacklogGraph> {
    let text = if path == Path::new("-") {
        std::io::read_to_string(std::io::stdin())
    } else {
        std::fs::read_to_string(path)
    }
    .map_err(|source| CliError::BacklogFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(BacklogGraph::from_generated_json(&text)?)
}

/// Execute a command and return its JSON result.
pub async fn run(command: &Commands, config: &Config) -> CliResult<Value> {
    match command {
        Commands::TestConnection => test_connection(config).await,
        Commands::Check { backlog } => Ok(check(&load_backlog(backlog)?)),
        Commands::Export { backlog } => export(config, &load_backlog(backlog)?).await,
    }
}

fn client(config: &Config) -> CliResult<AdoClient> {
    let export_config = config.export_config()?;
    let options = AdoClientOptions::from(&config.tracker);
    Ok(AdoClient::with_options(export_config, options)?)
}

async fn test_connection(config: &Config) -> CliResult<Value> {
    let project = client(config)?.test_connection().await?;
    let message = format!("Successfully connected to project: \"{project}\"!");
    info!("{message}");

    Ok(json!({
        "project": project,
        "message": message,
    }))
}

pub(crate) fn check(graph: &BacklogGraph) -> Value {
    let diagnostics = graph.diagnostics();
    let warnings = diagnostics.warnings();
    for warning in &warnings {
        warn!("{warning}");
    }

    json!({
        "counts": graph.counts(),
        "clean": diagnostics.is_clean(),
        "diagnostics": diagnostics,
        "warnings": warnings,
    })
}

async fn export(config: &Config, graph: &BacklogGraph) -> CliResult<Value> {
    let client = client(config)?;
    let settings = ExportSettings::from(&config.export);

    // Progress reaches the user through the logger.
    let report = export_backlog(&client, graph, &settings, &NoProgress).await?;

    Ok(json!({
        "report": report,
        "warnings": graph.diagnostics().warnings(),
    }))
}
