
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Every override the loader reads, cleared for the duration of a test
pub(crate) fn clear_overrides() -> Vec<EnvGuard> {
    [
        "SPO_ORG_URL",
        "SPO_PROJECT",
        "SPO_ACCESS_TOKEN",
        "SPO_API_VERSION",
        "SPO_PROJECTS_API_VERSION",
        "SPO_REQUEST_TIMEOUT_SECS",
        "SPO_MAX_CONCURRENT_LINKS",
        "SPO_LOG_LEVEL",
        "SPO_LOG_COLORED",
        "SPO_LOG_FILE",
    ]
    .into_iter()
    .map(EnvGuard::remove)
    .collect()
}

/// Create a temp config directory, set SPO_CONFIG_DIR and clear overrides
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let mut guards = clear_overrides();
    guards.push(EnvGuard::set(
        "SPO_CONFIG_DIR",
        temp.path().to_str().unwrap(),
    ));
    (temp, guards)
}

pub(crate) fn write_config(temp: &TempDir, contents: &str) {
    std::fs::write(temp.path().join(crate::CONFIG_FILE_NAME), contents).unwrap();
}
