//! Turning input lines into namespace commands.

mod command;

pub use command::{Command, CommandError};
