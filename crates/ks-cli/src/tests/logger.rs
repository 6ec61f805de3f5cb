use crate::logger::{effective_level, initialize};

use ks_config::{LogLevel, LoggingConfig};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err};
use log::LevelFilter;
use tempfile::TempDir;

#[test]
fn given_no_override_when_effective_level_then_configured_level() {
    let logging = LoggingConfig {
        level: LogLevel(LevelFilter::Warn),
        ..LoggingConfig::default()
    };

    assert_that!(effective_level(&logging, None), eq(LevelFilter::Warn));
}

#[test]
fn given_flag_override_when_effective_level_then_flag_wins() {
    let logging = LoggingConfig {
        level: LogLevel(LevelFilter::Warn),
        ..LoggingConfig::default()
    };

    let level = effective_level(&logging, Some(LogLevel(LevelFilter::Trace)));

    assert_that!(level, eq(LevelFilter::Trace));
}

#[test]
fn given_unopenable_log_file_when_initialize_then_error_mentions_path() {
    // Given
    let temp = TempDir::new().unwrap();
    let log_path = temp.path().join("missing-dir").join("ks.log");
    let logging = LoggingConfig {
        file: Some(log_path.to_str().unwrap().to_string()),
        ..LoggingConfig::default()
    };

    // When
    let result = initialize(&logging, None);

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("missing-dir"));
}
