use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Log a summary of the configured key-store options (secrets are never shown)
    Show,

    /// Print the configured key-store options as a JSON document
    Export,

    /// Read a JSON document and print it with defaults applied
    Import {
        /// Path to the JSON document
        file: PathBuf,
    },
}

impl Commands {
    pub(crate) fn reads_config_file(&self) -> bool {
        matches!(self, Commands::Show | Commands::Export)
    }
}
