//! Command dispatcher
//!
//! Resolves identifiers against a [`CommandRegistry`] and runs the matching
//! handler, or prints the help listing.

use std::ffi::OsString;
use std::fmt;
use std::io::{self, Write};

use tracing::debug;

use crate::command::Command;
use crate::error::{CmdFireError, Result};
use crate::help::{format_help, format_not_found, HelpStyle};
use crate::registry::CommandRegistry;

/// Number of leading process arguments that precede the command identifier
/// (the program path).
pub const LEADING_PROCESS_ARGS: usize = 1;

/// Drop the leading process arguments and convert the rest to strings
///
/// Tokens that are not valid UTF-8 are converted lossily. At least
/// `LEADING_PROCESS_ARGS + 1` raw tokens are needed before an identifier is
/// present.
pub fn split_process_args<I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    raw.into_iter()
        .skip(LEADING_PROCESS_ARGS)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

/// How a dispatch request ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A command handler ran to completion
    Dispatched,
    /// The help listing was printed
    HelpShown,
    /// No command matched the requested identifier
    NotFound,
    /// Nothing was requested and help was suppressed
    Idle,
}

impl Outcome {
    /// Process exit code for this outcome
    ///
    /// Handler failures surface as errors and map to `1` at the process
    /// boundary; a lookup miss maps to `2`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Dispatched | Outcome::HelpShown | Outcome::Idle => 0,
            Outcome::NotFound => 2,
        }
    }
}

/// Looks up commands and fires them
///
/// Output from `help`, the not-found message and handlers that use
/// [`Dispatcher::out`] all go to the same sink.
///
/// # Example
///
/// ```
/// use cmdfire_core::{Command, CommandRegistry, Dispatcher, Outcome};
/// use std::io::Write;
///
/// let mut registry = CommandRegistry::with_defaults();
/// Command::builder("greet", |ctx, args| {
///     writeln!(ctx.out(), "Hello, {}", args.join(" "))?;
///     Ok(())
/// })
/// .usage("<name>")
/// .register(&mut registry);
///
/// let mut dispatcher = Dispatcher::new(registry, Vec::<u8>::new());
/// let outcome = dispatcher.fire("greet", &["World".to_string()])?;
/// assert_eq!(outcome, Outcome::Dispatched);
/// # Ok::<(), cmdfire_core::CmdFireError>(())
/// ```
pub struct Dispatcher {
    registry: CommandRegistry,
    out: Box<dyn Write>,
    style: HelpStyle,
}

impl Dispatcher {
    /// Create a dispatcher writing to `out`
    pub fn new(registry: CommandRegistry, out: impl Write + 'static) -> Self {
        Self {
            registry,
            out: Box::new(out),
            style: HelpStyle::default(),
        }
    }

    /// Create a dispatcher writing to standard output
    pub fn stdout(registry: CommandRegistry) -> Self {
        Self::new(registry, io::stdout())
    }

    /// Set how help and messages are rendered
    pub fn with_style(mut self, style: HelpStyle) -> Self {
        self.style = style;
        self
    }

    /// Get the render settings
    pub fn style(&self) -> &HelpStyle {
        &self.style
    }

    /// Get the registry
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Output sink shared with handlers
    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    /// All registered commands in registration order
    pub fn get_all_commands(&self) -> &[Command] {
        self.registry.commands()
    }

    /// Find a command by identifier, or by name when one is given
    pub fn get_command(&self, identifier: &str, name: Option<&str>) -> Option<&Command> {
        self.registry.get_command(identifier, name)
    }

    /// Print every registered command
    pub fn help(&mut self) -> Result<()> {
        let listing = format_help(self.registry.commands(), &self.style)?;
        self.out.write_all(listing.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    /// Fire the command registered under `identifier`
    ///
    /// An empty identifier prints help. An unknown identifier prints a
    /// not-found message and is not an error. A failing handler is returned
    /// as [`CmdFireError::Handler`].
    pub fn fire(&mut self, identifier: &str, args: &[String]) -> Result<Outcome> {
        if identifier.is_empty() {
            self.help()?;
            return Ok(Outcome::HelpShown);
        }

        let Some(command) = self.registry.get_command(identifier, None).cloned() else {
            debug!(identifier, "No command matched");
            let message = format_not_found(identifier, self.style.color);
            writeln!(self.out, "{}", message)?;
            self.out.flush()?;
            return Ok(Outcome::NotFound);
        };

        debug!(identifier, ?args, "Firing command");
        command
            .execute(self, args)
            .map_err(|source| CmdFireError::Handler {
                identifier: identifier.to_string(),
                source,
            })?;
        self.out.flush()?;

        Ok(Outcome::Dispatched)
    }

    /// Entry point: split `args` into identifier and arguments and fire
    ///
    /// When `args` is `None`, the process arguments are used, minus the
    /// program path. An empty invocation prints help only if
    /// `print_help_on_empty` is set.
    pub fn init(
        &mut self,
        print_help_on_empty: bool,
        args: Option<Vec<String>>,
    ) -> Result<Outcome> {
        let args = args.unwrap_or_else(|| split_process_args(std::env::args_os()));

        match args.split_first() {
            Some((identifier, rest)) => self.fire(identifier, rest),
            None if print_help_on_empty => {
                self.help()?;
                Ok(Outcome::HelpShown)
            }
            None => Ok(Outcome::Idle),
        }
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("registry", &self.registry)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}
