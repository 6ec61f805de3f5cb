//! Key-store options for JWT signing and verification.
//!
//! [`KeyStoreOptions`] describes how a key store should be loaded: its type,
//! a path or in-memory value, the store password and optional per-alias
//! passwords. Loading the store itself is left to the consumer.

mod buffer_codec;
mod config;
mod error;
mod key_store_options;
mod keystore_type;
mod log_level;
mod logging_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use key_store_options::KeyStoreOptions;
pub use keystore_type::default_keystore_type;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

#[cfg(test)]
mod tests;

const DEFAULT_KEYSTORE_TYPE: &str = "pkcs12";
const DEFAULT_KEYSTORE_TYPE_ENV: &str = "KS_DEFAULT_KEYSTORE_TYPE";
const DEFAULT_CONFIG_DIR: &str = ".ks";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
