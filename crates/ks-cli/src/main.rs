//! ks - JWT key-store options tool
//!
//! Loads key-store options from `<config_dir>/config.toml` plus `KS_*`
//! environment overrides, and converts them to and from the JSON document
//! consumed by key-store loaders.
//!
//! # Examples
//!
//! ```bash
//! # Summarize the configured key store (secrets are never logged)
//! ks show
//!
//! # Print the options as JSON
//! ks export --pretty
//!
//! # Normalize a JSON document (fills in the default type)
//! ks import options.json
//! ```

mod cli;
mod commands;
mod error;
mod logger;

#[cfg(test)]
mod tests;

use crate::{
    cli::Cli,
    commands::Commands,
    error::{CliError, Result as CliResult},
};

use ks_config::{Config, KeyStoreOptions, LogLevel};

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};
use serde_json::Value;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = load_config(&cli)?;
    let level_override = cli.log_level.as_deref().map(LogLevel::parse_lenient);

    logger::initialize(&config.logging, level_override)?;

    match cli.command {
        Commands::Show => {
            config.log_summary();
            Ok(())
        }
        Commands::Export => {
            let document = config.keystore.to_json()?;
            println!("{}", render(&document, cli.pretty)?);
            Ok(())
        }
        Commands::Import { file } => {
            let options = import(&file)?;
            info!("Imported key-store options from {}", file.display());
            debug!("{:?}", options);

            let document = options.to_json()?;
            println!("{}", render(&document, cli.pretty)?);
            Ok(())
        }
    }
}

/// Configuration for this invocation. config.toml is only read by commands
/// that report on it; the rest run on defaults plus KS_* overrides.
fn load_config(cli: &Cli) -> CliResult<Config> {
    if !cli.command.reads_config_file() {
        return Ok(Config::from_env());
    }

    let config = match cli.config_dir {
        Some(ref dir) => Config::load_from(dir)?,
        None => Config::load()?,
    };

    Ok(config)
}

/// Read a JSON document from disk and decode it into key-store options.
fn import(path: &Path) -> CliResult<KeyStoreOptions> {
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let document: Value = serde_json::from_str(&contents).map_err(CliError::from_json)?;

    Ok(KeyStoreOptions::from_json(&document)?)
}

fn render(document: &Value, pretty: bool) -> CliResult<String> {
    let output = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    };

    output.map_err(CliError::from_json)
}
