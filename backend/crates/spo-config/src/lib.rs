mod config;
mod error;
mod export_settings_config;
mod log_level;
mod logging_config;
mod tracker_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use export_settings_config::ExportSettingsConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use tracker_config::TrackerConfig;

pub const CONFIG_DIR_ENV: &str = "SPO_CONFIG_DIR";
pub const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_CONFIG_DIR: &str = ".spo";

const DEFAULT_API_VERSION: &str = "7.1-preview.3";
const DEFAULT_PROJECTS_API_VERSION: &str = "7.1-preview.4";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
