use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure of the upstream backlog generation step.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Failed to generate stories: malformed output: {message} {location}")]
    MalformedOutput {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to generate stories: {message} {location}")]
    Upstream {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, GenerationError>;
