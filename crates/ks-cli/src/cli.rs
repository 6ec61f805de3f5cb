use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ks")]
#[command(about = "Inspect and convert JWT key-store options")]
#[command(version)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Config directory (defaults to KS_CONFIG_DIR, then ./.ks)
    #[arg(long, global = true)]
    pub(crate) config_dir: Option<PathBuf>,

    /// Log level override (off, error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub(crate) log_level: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
