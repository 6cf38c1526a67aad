use std::str::FromStr;

use derive_more::Display;
use snafu::Snafu;

use crate::filesystem::{CreateError, DeleteError, MoveError};

const TOKEN_SEPARATOR: char = ' ';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CommandKeyword {
    #[display("CREATE")]
    Create,
    #[display("MOVE")]
    Move,
    #[display("DELETE")]
    Delete,
    #[display("LIST")]
    List,
}

impl CommandKeyword {
    /// Number of arguments expected after the keyword
    pub fn arity(&self) -> usize {
        match self {
            CommandKeyword::Create => 1,
            CommandKeyword::Move => 2,
            CommandKeyword::Delete => 1,
            CommandKeyword::List => 0,
        }
    }
}

impl FromStr for CommandKeyword {
    type Err = CommandError;

    fn from_str(keyword: &str) -> Result<Self, Self::Err> {
        match keyword.to_uppercase().as_str() {
            "CREATE" => Ok(CommandKeyword::Create),
            "MOVE" => Ok(CommandKeyword::Move),
            "DELETE" => Ok(CommandKeyword::Delete),
            "LIST" => Ok(CommandKeyword::List),
            _ => Err(CommandError::NotSupported {
                command: keyword.to_string(),
            }),
        }
    }
}

/// A single line of input, checked for a known keyword and the right number of arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create { path: String },
    Move { from: String, to: String },
    Delete { path: String },
    List,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut tokens = line.split(TOKEN_SEPARATOR);
        let keyword = tokens.next().unwrap_or_default().parse::<CommandKeyword>()?;
        let mut arguments = tokens.map(str::to_string).collect::<Vec<_>>();

        if arguments.len() != keyword.arity() {
            return Err(CommandError::ArgumentsMismatch {
                command: keyword,
                expected: keyword.arity(),
                found: arguments.len(),
            });
        }

        let command = match keyword {
            CommandKeyword::Create => Command::Create {
                path: arguments.remove(0),
            },
            CommandKeyword::Move => {
                let to = arguments.remove(1);
                let from = arguments.remove(0);
                Command::Move { from, to }
            }
            CommandKeyword::Delete => Command::Delete {
                path: arguments.remove(0),
            },
            CommandKeyword::List => Command::List,
        };

        Ok(command)
    }

    pub fn keyword(&self) -> CommandKeyword {
        match self {
            Command::Create { .. } => CommandKeyword::Create,
            Command::Move { .. } => CommandKeyword::Move,
            Command::Delete { .. } => CommandKeyword::Delete,
            Command::List => CommandKeyword::List,
        }
    }
}

fn plural_suffix(count: &usize) -> &'static str {
    if *count > 1 { "s" } else { "" }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum CommandError {
    #[snafu(display("command '{}' is not supported", command))]
    NotSupported { command: String },
    #[snafu(display(
        "'{}' command expect {} argument{} after command name. Instead found {}",
        command,
        expected,
        plural_suffix(expected),
        found
    ))]
    ArgumentsMismatch {
        command: CommandKeyword,
        expected: usize,
        found: usize,
    },
    #[snafu(transparent)]
    Create { source: CreateError },
    #[snafu(transparent)]
    Move { source: MoveError },
    #[snafu(transparent)]
    Delete { source: DeleteError },
}
