//! Command registry
//!
//! Append-only list of commands kept in registration order.

use tracing::warn;

use crate::command::Command;
use crate::dispatcher::Dispatcher;
use crate::error::{CmdFireError, Result};

/// Identifier of the built-in help command
pub const HELP_IDENTIFIER: &str = "help";

/// Registry of every command a [`Dispatcher`] can fire
///
/// Commands are never removed or reordered. When identifiers repeat, lookups
/// resolve to the command registered first.
///
/// # Example
///
/// ```
/// use cmdfire_core::{Command, CommandRegistry};
///
/// let mut registry = CommandRegistry::with_defaults();
/// Command::builder("echo", |_, _| Ok(()))
///     .usage("[args...]")
///     .register(&mut registry);
///
/// assert_eq!(registry.len(), 2);
/// assert!(registry.get_command("echo", None).is_some());
/// ```
#[derive(Debug, Default, Clone)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in `help` command
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(help_command());
        registry
    }

    /// Append a command.
    ///
    /// Duplicate identifiers are accepted but shadowed by the earlier command.
    pub fn register(&mut self, command: Command) -> &Command {
        if self.find_identifier(command.identifier()).is_some() {
            warn!(
                identifier = command.identifier(),
                "Duplicate command identifier; the first registration wins"
            );
        }

        let index = self.commands.len();
        self.commands.push(command);
        &self.commands[index]
    }

    /// Append a command, rejecting identifier or name collisions
    ///
    /// Fails when the identifier is already taken, or when the command's
    /// effective name (the identifier if unnamed) equals the identifier or
    /// name of a registered command, or when the identifier equals a
    /// registered command's name.
    pub fn try_register(&mut self, command: Command) -> Result<&Command> {
        if self.find_identifier(command.identifier()).is_some() {
            return Err(CmdFireError::DuplicateIdentifier(
                command.identifier().to_string(),
            ));
        }

        let name = command.name();
        let clash = self.commands.iter().find(|c| {
            c.identifier() == name || c.name() == name || c.name() == command.identifier()
        });
        if let Some(existing) = clash {
            return Err(CmdFireError::NameClash {
                identifier: command.identifier().to_string(),
                name: name.to_string(),
                existing: existing.identifier().to_string(),
            });
        }

        Ok(self.register(command))
    }

    /// Register every command in order
    pub fn extend<I>(&mut self, commands: I)
    where
        I: IntoIterator<Item = Command>,
    {
        for command in commands {
            self.register(command);
        }
    }

    /// All commands in registration order
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if no command is registered
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Find a command by identifier or by display name
    ///
    /// Returns the first command whose identifier equals `identifier`, or
    /// whose name equals `name`. Either field matching is enough, so a command
    /// can be located by name alone.
    pub fn get_command(&self, identifier: &str, name: Option<&str>) -> Option<&Command> {
        self.commands
            .iter()
            .find(|c| c.identifier() == identifier || name.is_some_and(|n| c.name() == n))
    }

    fn find_identifier(&self, identifier: &str) -> Option<&Command> {
        self.get_command(identifier, None)
    }
}

impl FromIterator<Command> for CommandRegistry {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

/// The built-in `help` command
pub fn help_command() -> Command {
    Command::builder(HELP_IDENTIFIER, |ctx: &mut Dispatcher, _| {
        ctx.help()?;
        Ok(())
    })
    .name("Help")
    .description("List all available commands and their usage")
    .build()
}
