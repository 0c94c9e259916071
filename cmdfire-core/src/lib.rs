//! cmdfire Core Library
//!
//! Command registry and dispatcher for small command-line programs.
//! Commands are declared with [`Command::builder`], collected in a
//! [`CommandRegistry`] and fired through a [`Dispatcher`].

pub mod command;
pub mod dispatcher;
pub mod error;
pub mod help;
pub mod paths;
pub mod registry;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use command::{Command, CommandBuilder, Handler};
pub use dispatcher::{split_process_args, Dispatcher, Outcome, LEADING_PROCESS_ARGS};
pub use error::*;
pub use help::{HelpFormat, HelpLayout, HelpStyle};
pub use paths::default_config_path;
pub use registry::{help_command, CommandRegistry, HELP_IDENTIFIER};
