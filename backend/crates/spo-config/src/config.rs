use crate::{
    CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    ExportSettingsConfig, LoggingConfig, TrackerConfig,
};

use spo_core::ExportConfig;

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub tracker: TrackerConfig,
    pub export: ExportSettingsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config from the default config directory.
    ///
    /// Loading order:
    /// 1. Check for SPO_CONFIG_DIR env var, else use ./.spo/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply SPO_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from(&config_dir)
    }

    /// Same as [`Config::load`] with an explicit config directory.
    ///
    /// The directory is never created; a missing directory or file means
    /// defaults plus environment overrides.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SPO_CONFIG_DIR env var > ./.spo/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.tracker.validate()?;
        self.export.validate()?;
        Ok(())
    }

    /// Build the connection triple used by an export run.
    ///
    /// Fails when any of organization URL, project or token is missing.
    pub fn export_config(&self) -> ConfigErrorResult<ExportConfig> {
        let organization_url = Self::required(
            self.tracker.organization_url.as_deref(),
            "tracker.organization_url (or SPO_ORG_URL)",
        )?;
        let project = Self::required(self.tracker.project.as_deref(), "tracker.project (or SPO_PROJECT)")?;
        let access_token = Self::required(
            self.tracker.access_token.as_deref(),
            "tracker.access_token (or SPO_ACCESS_TOKEN)",
        )?;

        ExportConfig::new(organization_url, project, access_token)
            .map_err(|e| ConfigError::tracker(e.to_string()))
    }

    fn required<'a>(value: Option<&'a str>, name: &str) -> ConfigErrorResult<&'a str> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(ConfigError::tracker(format!("{name} is not set"))),
        }
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  tracker: org={}, project={}, token={}",
            self.tracker.organization_url.as_deref().unwrap_or("<unset>"),
            self.tracker.project.as_deref().unwrap_or("<unset>"),
            if self.tracker.has_token() {
                "present"
            } else {
                "missing"
            }
        );
        info!(
            "  api: work items={}, projects={}, timeout={}",
            self.tracker.api_version,
            self.tracker.projects_api_version,
            self.tracker
                .request_timeout_secs
                .map(|secs| format!("{secs}s"))
                .unwrap_or_else(|| "transport default".to_string())
        );
        info!(
            "  export: max_concurrent_links={}",
            self.export.max_concurrent_links
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Tracker
        Self::apply_env_option_string("SPO_ORG_URL", &mut self.tracker.organization_url);
        Self::apply_env_option_string("SPO_PROJECT", &mut self.tracker.project);
        Self::apply_env_option_string("SPO_ACCESS_TOKEN", &mut self.tracker.access_token);
        Self::apply_env_string("SPO_API_VERSION", &mut self.tracker.api_version);
        Self::apply_env_string(
            "SPO_PROJECTS_API_VERSION",
            &mut self.tracker.projects_api_version,
        );
        Self::apply_env_option_parse(
            "SPO_REQUEST_TIMEOUT_SECS",
            &mut self.tracker.request_timeout_secs,
        );

        // Export
        Self::apply_env_parse(
            "SPO_MAX_CONCURRENT_LINKS",
            &mut self.export.max_concurrent_links,
        );

        // Logging
        Self::apply_env_parse("SPO_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SPO_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SPO_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<T> values
    fn apply_env_option_parse<T: std::str::FromStr>(var_name: &str, target: &mut Option<T>) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = Some(parsed);
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
