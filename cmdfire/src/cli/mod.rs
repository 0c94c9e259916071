//! CLI definitions and built-in commands
//!
//! This module organizes the CLI into logical submodules:
//! - [`args`] - Global flags and the captured command line
//! - [`builtins`] - Commands registered by the `cmdfire` binary

mod args;
mod builtins;

pub use args::*;
pub use builtins::*;
