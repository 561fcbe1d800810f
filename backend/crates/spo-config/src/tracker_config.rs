use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_VERSION, DEFAULT_PROJECTS_API_VERSION};

use std::fmt;

use serde::Deserialize;

pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

/// Remote tracker connection settings.
///
/// The access token may be set here but is normally supplied through
/// `SPO_ACCESS_TOKEN` so it never lands on disk.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// e.g. https://dev.azure.com/contoso
    pub organization_url: Option<String>,
    pub project: Option<String>,
    pub access_token: Option<String>,
    /// api-version for work item create/patch calls
    pub api_version: String,
    /// api-version for the project lookup used by the connection test
    pub projects_api_version: String,
    /// Per-request timeout; None leaves the transport default in place
    pub request_timeout_secs: Option<u64>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            organization_url: None,
            project: None,
            access_token: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            projects_api_version: DEFAULT_PROJECTS_API_VERSION.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(url) = &self.organization_url
            && !(url.starts_with("https://") || url.starts_with("http://"))
        {
            return Err(ConfigError::tracker(format!(
                "tracker.organization_url must start with http:// or https://, got {url}"
            )));
        }

        if self.api_version.trim().is_empty() {
            return Err(ConfigError::tracker("tracker.api_version must not be empty"));
        }

        if self.projects_api_version.trim().is_empty() {
            return Err(ConfigError::tracker(
                "tracker.projects_api_version must not be empty",
            ));
        }

        if let Some(timeout) = self.request_timeout_secs
            && !(MIN_REQUEST_TIMEOUT_SECS..=MAX_REQUEST_TIMEOUT_SECS).contains(&timeout)
        {
            return Err(ConfigError::tracker(format!(
                "tracker.request_timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, timeout
            )));
        }

        Ok(())
    }

    pub fn has_token(&self) -> bool {
        self.access_token
            .as_deref()
            .is_some_and(|token| !token.trim().is_empty())
    }
}

impl fmt::Debug for TrackerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackerConfig")
            .field("organization_url", &self.organization_url)
            .field("project", &self.project)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("api_version", &self.api_version)
            .field("projects_api_version", &self.projects_api_version)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
