use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_MAX_CONCURRENT_LINKS: usize = 1;
pub const MAX_MAX_CONCURRENT_LINKS: usize = 256;
pub const DEFAULT_MAX_CONCURRENT_LINKS: usize = 16;

/// Tuning for the export run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportSettingsConfig {
    /// Upper bound on dependency-link requests in flight at once
    pub max_concurrent_links: usize,
}

impl Default for ExportSettingsConfig {
    fn default() -> Self {
        Self {
            max_concurrent_links: DEFAULT_MAX_CONCURRENT_LINKS,
        }
    }
}

impl ExportSettingsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_concurrent_links < MIN_MAX_CONCURRENT_LINKS
            || self.max_concurrent_links > MAX_MAX_CONCURRENT_LINKS
        {
            return Err(ConfigError::export(format!(
                "export.max_concurrent_links must be {}-{}, got {}",
                MIN_MAX_CONCURRENT_LINKS, MAX_MAX_CONCURRENT_LINKS, self.max_concurrent_links
            )));
        }

        Ok(())
    }
}
