use spo_config::ExportSettingsConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    /// Dependency-link requests allowed in flight at once (minimum 1)
    pub max_concurrent_links: usize,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self::from(&ExportSettingsConfig::default())
    }
}

impl From<&ExportSettingsConfig> for ExportSettings {
    fn from(config: &ExportSettingsConfig) -> Self {
        Self {
            max_concurrent_links: config.max_concurrent_links,
        }
    }
}
