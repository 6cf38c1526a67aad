use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::config::{Settings, SettingsError};
use crate::console::{Session, SessionError};
use crate::filesystem::{CreateError, Namespace};

pub struct Application;

impl Application {
    pub fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        let settings = Settings::read(&app_config.root, app_config.settings_path.as_deref())
            .context(SettingsSnafu)?;
        debug!("Loaded settings: {:?}", settings);

        let namespace = Self::preloaded_namespace(&settings)?;
        let mut session = Session::new(namespace, &settings);

        let input: Box<dyn BufRead> = match &app_config.script {
            Some(path) => {
                let file = File::open(path).context(ScriptSnafu { path: path.clone() })?;
                Box::new(BufReader::new(file))
            }
            None => Box::new(io::stdin().lock()),
        };

        let handled = session
            .run(input, &mut io::stdout().lock(), &mut io::stderr().lock())
            .context(SessionSnafu)?;
        info!(
            "Session ended after {} commands with {} top-level directories",
            handled,
            session.namespace().root().len()
        );

        Ok(())
    }

    fn preloaded_namespace(settings: &Settings) -> Result<Namespace, ApplicationError> {
        let mut namespace = Namespace::new();
        for path in &settings.preload {
            namespace
                .create(path)
                .context(PreloadSnafu { path: path.clone() })?;
        }
        if !settings.preload.is_empty() {
            info!("Preloaded {} paths", settings.preload.len());
        }
        Ok(namespace)
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading settings"))]
    SettingsError { source: SettingsError },
    #[snafu(display("Failed to preload directory '{}'", path))]
    PreloadError { path: String, source: CreateError },
    #[snafu(display("Failed to open command script {}", path.display()))]
    ScriptError { path: PathBuf, source: io::Error },
    #[snafu(display("Critical failure encountered during the interactive session"))]
    SessionError { source: SessionError },
}
