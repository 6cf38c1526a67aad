use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

/// Interactive shell over an in-memory directory tree.
///
/// Reads CREATE, MOVE, DELETE and LIST commands, one per line, until `quit`.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    #[clap(long, short, default_value = "silent", value_enum)]
    pub log_level: LogLevel,

    /// Settings file; `dirtree.yaml` in the current directory is used when present
    #[clap(long, short)]
    pub config: Option<PathBuf>,

    /// Read commands from this file instead of standard input
    #[clap(long, short)]
    pub script: Option<PathBuf>,

    /// Never color error messages
    #[clap(long)]
    pub no_color: bool,
}
