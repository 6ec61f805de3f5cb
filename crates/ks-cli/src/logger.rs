use crate::error::{CliError, Result as CliResult};

use ks_config::{LogLevel, LoggingConfig};

use std::fmt::Arguments;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback, Output};
use log::{LevelFilter, Record, debug};

/// Install the global fern logger.
///
/// Records go to `logging.file` when set, otherwise to stderr so stdout only
/// ever carries JSON documents. `level_override` (the `--log-level` flag)
/// beats the configured level. Colors apply to stderr only.
pub fn initialize(logging: &LoggingConfig, level_override: Option<LogLevel>) -> CliResult<()> {
    let level_filter = effective_level(logging, level_override);

    let (output, colors): (Output, Option<ColoredLevelConfig>) = match logging.file {
        Some(ref log_path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)
                .map_err(|e| CliError::Logger {
                    message: format!("Failed to open log file {log_path}: {e}"),
                })?;
            (file.into(), None)
        }
        None => (
            std::io::stderr().into(),
            logging.colored.then(level_colors),
        ),
    };

    Dispatch::new()
        .level(level_filter)
        .format(move |out, message, record| format_record(out, message, record, colors.as_ref()))
        .chain(output)
        .apply()
        .map_err(|e| CliError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    debug!(
        "Logger initialized: level={}, output={}",
        level_filter,
        logging.file.as_deref().unwrap_or("stderr")
    );

    Ok(())
}

pub(crate) fn effective_level(
    logging: &LoggingConfig,
    level_override: Option<LogLevel>,
) -> LevelFilter {
    level_override.unwrap_or(logging.level).into()
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

fn format_record(
    out: FormatCallback,
    message: &Arguments,
    record: &Record,
    colors: Option<&ColoredLevelConfig>,
) {
    let date = humantime::format_rfc3339_seconds(SystemTime::now());

    match colors {
        Some(colors) => out.finish(format_args!(
            "[{date} - {}] {message}",
            colors.color(record.level())
        )),
        None => out.finish(format_args!("[{date} - {}] {message}", record.level())),
    }
}
