use std::path::PathBuf;

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Directory searched for the default settings file
    pub root: PathBuf,
    pub settings_path: Option<PathBuf>,
    pub script: Option<PathBuf>,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            root: PathBuf::from("."),
            settings_path: cli.config,
            script: cli.script,
        }
    }
}
