use crate::{
    CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR, KeyStoreOptions,
    LoggingConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub keystore: KeyStoreOptions,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for KS_CONFIG_DIR env var, else use ./.ks/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply KS_* environment variable overrides
    ///
    /// Nothing is validated; the key-store loader decides what it accepts.
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from(&config_dir)
    }

    /// Load from a specific config directory, then apply env overrides.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Defaults plus KS_* environment overrides, without reading config.toml.
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
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
    /// Priority: KS_CONFIG_DIR env var > ./.ks/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("KS_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        for line in self.summary_lines() {
            info!("  {}", line);
        }
    }

    /// Summary lines behind [`log_summary`](Self::log_summary). Passwords are
    /// reported as set/unset and aliases by name only.
    pub fn summary_lines(&self) -> Vec<String> {
        let keystore = &self.keystore;

        let source = match (keystore.path(), keystore.value()) {
            (Some(path), Some(value)) => format!("path={path}, value={} bytes", value.len()),
            (Some(path), None) => format!("path={path}"),
            (None, Some(value)) => format!("value={} bytes", value.len()),
            (None, None) => String::from("none"),
        };

        let password = if keystore.password().is_some() {
            "set"
        } else {
            "unset"
        };

        let aliases = match keystore.password_protection() {
            Some(protection) => {
                let mut aliases: Vec<&str> = protection.keys().map(String::as_str).collect();
                aliases.sort_unstable();
                format!("[{}]", aliases.join(", "))
            }
            None => String::from("none"),
        };

        vec![
            format!("keystore.type: {}", keystore.key_store_type()),
            format!("keystore.source: {source}"),
            format!("keystore.password: {password}"),
            format!("keystore.passwordProtection: {aliases}"),
            format!(
                "logging: {} (colored: {}, file: {})",
                *self.logging.level,
                self.logging.colored,
                self.logging.file.as_deref().unwrap_or("stderr")
            ),
        ]
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("KS_KEYSTORE_TYPE") {
            self.keystore.set_type(val);
        }
        if let Ok(val) = std::env::var("KS_KEYSTORE_PASSWORD") {
            self.keystore.set_password(val);
        }
        if let Ok(val) = std::env::var("KS_KEYSTORE_PATH") {
            self.keystore.set_path(val);
        }

        self.logging.apply_env_overrides();
    }
}
