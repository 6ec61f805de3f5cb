use crate::cli::Cli;
use crate::load_config;

use clap::Parser;
use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use tempfile::TempDir;

fn malformed_config_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "this is not valid toml {{{{").unwrap();
    temp
}

#[test]
fn given_malformed_config_when_import_then_config_file_not_read() {
    // Given
    let temp = malformed_config_dir();
    let dir = temp.path().to_str().unwrap();
    let cli = Cli::try_parse_from(["ks", "import", "options.json", "--config-dir", dir]).unwrap();

    // When
    let result = load_config(&cli);

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
fn given_malformed_config_when_show_then_error_mentions_file() {
    // Given
    let temp = malformed_config_dir();
    let dir = temp.path().to_str().unwrap();
    let cli = Cli::try_parse_from(["ks", "show", "--config-dir", dir]).unwrap();

    // When
    let result = load_config(&cli);

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
fn given_config_dir_when_export_then_keystore_read_from_file() {
    // Given
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("config.toml"),
        "[keystore]\ntype = \"bks\"\npath = \"keys.bks\"",
    )
    .unwrap();
    let dir = temp.path().to_str().unwrap();
    let cli = Cli::try_parse_from(["ks", "export", "--config-dir", dir]).unwrap();

    // When
    let config = load_config(&cli).unwrap();

    // Then
    assert_eq!(config.keystore.path(), Some("keys.bks"));
}
