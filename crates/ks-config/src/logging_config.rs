use crate::{DEFAULT_LOG_COLORED, DEFAULT_LOG_LEVEL, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colored output on stderr (ignored when logging to a file)
    pub colored: bool,
    /// Log file path. None = stderr
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            colored: DEFAULT_LOG_COLORED,
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Apply KS_LOG_LEVEL, KS_LOG_COLORED ("true"/"1") and KS_LOG_FILE.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("KS_LOG_LEVEL") {
            self.level = LogLevel::parse_lenient(&val);
        }
        if let Ok(val) = std::env::var("KS_LOG_COLORED") {
            self.colored = val == "true" || val == "1";
        }
        if let Ok(val) = std::env::var("KS_LOG_FILE") {
            self.file = Some(val);
        }
    }
}
