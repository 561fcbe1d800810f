use spo_config::TrackerConfig;

use std::time::Duration;

pub const DEFAULT_API_VERSION: &str = "7.1-preview.3";
pub const DEFAULT_PROJECTS_API_VERSION: &str = "7.1-preview.4";

/// Transport settings for [`crate::AdoClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdoClientOptions {
    /// api-version for work item create/patch calls
    pub api_version: String,
    /// api-version for the project lookup
    pub projects_api_version: String,
    /// None keeps reqwest's default (no timeout)
    pub timeout: Option<Duration>,
}

impl Default for AdoClientOptions {
    fn default() -> Self {
        Self {
            api_version: DEFAULT_API_VERSION.to_string(),
            projects_api_version: DEFAULT_PROJECTS_API_VERSION.to_string(),
            timeout: None,
        }
    }
}

impl From<&TrackerConfig> for AdoClientOptions {
    fn from(config: &TrackerConfig) -> Self {
        Self {
            api_version: config.api_version.clone(),
            projects_api_version: config.projects_api_version.clone(),
            timeout: config.request_timeout_secs.map(Duration::from_secs),
        }
    }
}
