mod log_level;

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

/// Create a temp config directory and set KS_CONFIG_DIR
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("KS_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Clear every KS_* override that could leak in from the host environment
pub(crate) fn clear_overrides() -> Vec<EnvGuard> {
    [
        "KS_DEFAULT_KEYSTORE_TYPE",
        "KS_KEYSTORE_TYPE",
        "KS_KEYSTORE_PASSWORD",
        "KS_KEYSTORE_PATH",
        "KS_LOG_LEVEL",
        "KS_LOG_COLORED",
        "KS_LOG_FILE",
    ]
    .into_iter()
    .map(EnvGuard::remove)
    .collect()
}
