use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] spo_config::ConfigError),

    #[error(transparent)]
    Tracker(#[from] spo_ado::TrackerError),

    #[error(transparent)]
    Export(#[from] spo_export::ExportError),

    #[error("Invalid backlog: {0}")]
    Backlog(#[from] spo_core::GenerationError),

    #[error("Failed to read backlog file {path}: {source}")]
    BacklogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, CliError>;
