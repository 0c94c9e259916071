//! cmdfire CLI Library
//!
//! Glue between the command line and [`cmdfire_core`]: global flags,
//! layered configuration and the built-in command set.
//!
//! ```no_run
//! use cmdfire::cli::builtin_registry;
//! use cmdfire::config::CliConfig;
//! use cmdfire_core::Dispatcher;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = CliConfig::builder().with_env_overrides().build();
//! let mut dispatcher = Dispatcher::stdout(builtin_registry(&config)?);
//! let outcome = dispatcher.init(config.help_on_empty, None)?;
//! std::process::exit(outcome.exit_code());
//! # }
//! ```

// Internal CLI implementation - not part of public API
#[doc(hidden)]
pub mod cli;

/// Configuration types for the CLI tool.
pub mod config;
