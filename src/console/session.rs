use std::io::{BufRead, Write};

use colored::Colorize;
use snafu::{ResultExt, Snafu};
use tracing::{debug, info};

use crate::commands::{Command, CommandError};
use crate::config::Settings;
use crate::filesystem::Namespace;

/// The line that ends a session.
const QUIT_LINE: &str = "quit";

/// An interactive session over a namespace.
///
/// Reads one command per line, applies it to the namespace and reports
/// failures on the error writer without ending the session.
pub struct Session {
    namespace: Namespace,
    indent: String,
    prompt: Option<String>,
}

impl Session {
    pub fn new(namespace: Namespace, settings: &Settings) -> Self {
        Self {
            namespace,
            indent: settings.indent.clone(),
            prompt: settings.prompt.clone(),
        }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Runs until `quit` or the end of input, returning the number of lines handled.
    pub fn run<R, W, E>(
        &mut self,
        mut input: R,
        output: &mut W,
        errors: &mut E,
    ) -> Result<usize, SessionError>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut handled = 0;
        let mut line = String::new();

        loop {
            if let Some(prompt) = &self.prompt {
                write!(output, "{prompt}").context(WriteSnafu)?;
                output.flush().context(WriteSnafu)?;
            }

            line.clear();
            if input.read_line(&mut line).context(ReadSnafu)? == 0 {
                debug!("Reached end of input");
                break;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed == QUIT_LINE {
                debug!("Received quit");
                break;
            }

            handled += 1;
            if let Err(err) = self.handle_line(trimmed, output).context(WriteSnafu)? {
                info!("Command '{}' failed: {}", trimmed, err);
                writeln!(errors, "{}", err.to_string().red()).context(WriteSnafu)?;
            }
        }

        Ok(handled)
    }

    /// Parses and applies one line.
    ///
    /// The outer result carries failures to write output, the inner one the
    /// outcome of the command itself.
    pub fn handle_line<W: Write>(
        &mut self,
        line: &str,
        output: &mut W,
    ) -> std::io::Result<Result<(), CommandError>> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(err) => return Ok(Err(err)),
        };
        debug!("Dispatching {} command: {:?}", command.keyword(), command);

        let outcome = match command {
            Command::Create { path } => self.namespace.create(&path).map_err(CommandError::from),
            Command::Move { from, to } => self
                .namespace
                .move_directory(&from, &to)
                .map_err(CommandError::from),
            Command::Delete { path } => self.namespace.delete(&path).map_err(CommandError::from),
            Command::List => {
                for entry in self.namespace.list() {
                    writeln!(output, "{}", entry.render(&self.indent))?;
                }
                Ok(())
            }
        };

        Ok(outcome)
    }
}

#[derive(Debug, Snafu)]
pub enum SessionError {
    #[snafu(display("Failed to read the next command line"))]
    ReadError { source: std::io::Error },
    #[snafu(display("Failed to write command output"))]
    WriteError { source: std::io::Error },
}
