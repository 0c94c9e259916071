//! Command definitions
//!
//! A [`Command`] binds an identifier to a handler plus the metadata shown by
//! `help`. Commands are built with [`CommandBuilder`] and become visible to a
//! [`Dispatcher`] only once registered in its [`CommandRegistry`].

use std::fmt;
use std::rc::Rc;

use crate::dispatcher::Dispatcher;
use crate::registry::CommandRegistry;

/// Handler invoked when a command fires.
///
/// The handler receives the dispatcher that fired it, so it can write to the
/// dispatcher's output, print help or fire other commands.
pub type Handler = Rc<dyn Fn(&mut Dispatcher, &[String]) -> anyhow::Result<()>>;

/// An invocable command
#[derive(Clone)]
pub struct Command {
    identifier: String,
    display_name: Option<String>,
    usage: String,
    description: String,
    handler: Handler,
}

impl Command {
    /// Create a builder for a command with the required fields
    ///
    /// # Example
    ///
    /// ```
    /// use cmdfire_core::Command;
    /// use std::io::Write;
    ///
    /// let greet = Command::builder("greet", |ctx, args| {
    ///     let who = args.first().map(String::as_str).unwrap_or("stranger");
    ///     writeln!(ctx.out(), "Hello, {}", who)?;
    ///     Ok(())
    /// })
    /// .name("Greet")
    /// .usage("<name>")
    /// .build();
    ///
    /// assert_eq!(greet.identifier(), "greet");
    /// assert_eq!(greet.name(), "Greet");
    /// ```
    pub fn builder<F>(identifier: impl Into<String>, handler: F) -> CommandBuilder
    where
        F: Fn(&mut Dispatcher, &[String]) -> anyhow::Result<()> + 'static,
    {
        CommandBuilder::new(identifier, Rc::new(handler))
    }

    /// Get the identifier used to fire the command
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Get the display name, falling back to the identifier
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.identifier)
    }

    /// Get the display name exactly as it was declared
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Get the usage text
    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// Get the description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the handler
    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Run the handler with the given arguments.
    ///
    /// Whatever the handler returns is passed through untouched.
    pub fn execute(&self, ctx: &mut Dispatcher, args: &[String]) -> anyhow::Result<()> {
        (self.handler)(ctx, args)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("identifier", &self.identifier)
            .field("display_name", &self.display_name)
            .field("usage", &self.usage)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing [`Command`] instances
///
/// Building is pure; [`CommandBuilder::register`] is the one-call shortcut
/// that builds and registers.
pub struct CommandBuilder {
    identifier: String,
    display_name: Option<String>,
    usage: String,
    description: String,
    handler: Handler,
}

impl CommandBuilder {
    /// Create a new builder with required fields
    pub fn new(identifier: impl Into<String>, handler: Handler) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: None,
            usage: String::new(),
            description: String::new(),
            handler,
        }
    }

    /// Set the display name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Set an optional display name
    pub fn maybe_name(mut self, name: Option<String>) -> Self {
        self.display_name = name;
        self
    }

    /// Set the usage text, e.g. `"<file_path>"`
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Build the command
    pub fn build(self) -> Command {
        Command {
            identifier: self.identifier,
            display_name: self.display_name,
            usage: self.usage,
            description: self.description,
            handler: self.handler,
        }
    }

    /// Build the command and append it to `registry`
    pub fn register(self, registry: &mut CommandRegistry) -> &Command {
        registry.register(self.build())
    }
}
