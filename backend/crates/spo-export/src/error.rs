use spo_ado::TrackerError;
use spo_core::GenerationError;

use thiserror::Error;

/// Fatal export failures. Dependency-link failures never appear here; they
/// are collected in the [`crate::ExportReport`].
#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Tracker(#[from] TrackerError),
}

impl ExportError {
    /// HTTP status of the failed remote call, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Tracker(err) => err.status(),
            Self::Generation(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
