//! CLI argument definitions

use std::path::PathBuf;

use clap::Parser;
use cmdfire_core::{HelpFormat, HelpLayout};

/// Fire registered commands by identifier
#[derive(Parser, Debug)]
#[command(name = "cmdfire")]
#[command(version, about = "Fire registered commands by identifier", long_about = None)]
pub struct Cli {
    /// Help output format (overrides config file)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Fields shown for each command in the help listing (overrides config file)
    #[arg(short, long, value_enum)]
    pub layout: Option<Layout>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Don't print help when no command is given
    #[arg(long)]
    pub quiet_empty: bool,

    /// Don't load config file
    #[arg(long)]
    pub no_config: bool,

    /// Config file path (default: ~/.config/cmdfire/cli.toml)
    #[arg(long, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Command identifier followed by its arguments
    ///
    /// Everything after the identifier is passed to the command untouched.
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per command
    Plain,
    /// Pretty table output
    Table,
    /// JSON output
    Json,
}

impl From<OutputFormat> for HelpFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Plain => HelpFormat::Plain,
            OutputFormat::Table => HelpFormat::Table,
            OutputFormat::Json => HelpFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Layout {
    /// `[<name>] <identifier> <usage>`
    Named,
    /// `<identifier> <usage> <description>`
    Described,
}

impl From<Layout> for HelpLayout {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Named => HelpLayout::Named,
            Layout::Described => HelpLayout::Described,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_trailing_args_are_captured_verbatim() {
        let cli = Cli::parse_from(["cmdfire", "-f", "json", "echo", "-x", "--long", "plain"]);

        assert!(matches!(cli.format, Some(OutputFormat::Json)));
        assert_eq!(cli.command, vec!["echo", "-x", "--long", "plain"]);
    }

    #[test]
    fn test_no_command_is_empty() {
        let cli = Cli::parse_from(["cmdfire", "--quiet-empty"]);
        assert!(cli.command.is_empty());
        assert!(cli.quiet_empty);
    }

    #[test]
    fn test_value_enum_conversions() {
        assert_eq!(HelpFormat::from(OutputFormat::Table), HelpFormat::Table);
        assert_eq!(HelpLayout::from(Layout::Described), HelpLayout::Described);
    }
}
