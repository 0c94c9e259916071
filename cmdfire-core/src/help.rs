//! Help listing and message formatting
//!
//! The plain format reproduces the classic console listing byte for byte; the
//! table and JSON formats carry the same fields.

use std::fmt;
use std::str::FromStr;

use colored::*;
use serde::{Deserialize, Serialize};
use tabled::{settings::Style, Table, Tabled};

use crate::command::Command;
use crate::error::{CmdFireError, Result};
use crate::registry::HELP_IDENTIFIER;

/// Notice printed instead of command lines when nothing is registered
pub const EMPTY_NOTICE: &str = "No commands registered.";

/// Which fields a help line shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HelpLayout {
    /// `[<name>] <identifier> <usage>`
    #[default]
    Named,
    /// `<identifier> <usage> <description>`
    Described,
}

impl HelpLayout {
    /// Reference line describing the field order
    pub fn reference(&self) -> &'static str {
        match self {
            HelpLayout::Named => "[command_name] command_identifier command_usage",
            HelpLayout::Described => "command_identifier command_usage command_description",
        }
    }

    /// Format one command as a plain help line
    pub fn line(&self, command: &Command) -> String {
        match self {
            HelpLayout::Named => format!(
                "[{}] {} {}",
                command.name(),
                command.identifier(),
                command.usage()
            ),
            HelpLayout::Described => format!(
                "{} {} {}",
                command.identifier(),
                command.usage(),
                command.description()
            ),
        }
    }
}

impl fmt::Display for HelpLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HelpLayout::Named => write!(f, "named"),
            HelpLayout::Described => write!(f, "described"),
        }
    }
}

impl FromStr for HelpLayout {
    type Err = CmdFireError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "named" => Ok(HelpLayout::Named),
            "described" => Ok(HelpLayout::Described),
            _ => Err(CmdFireError::InvalidInput(format!(
                "Invalid help layout '{}'. Must be 'named' or 'described'",
                s
            ))),
        }
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HelpFormat {
    /// Classic line-per-command listing
    #[default]
    Plain,
    /// Pretty table output
    Table,
    /// JSON output
    Json,
}

impl fmt::Display for HelpFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HelpFormat::Plain => write!(f, "plain"),
            HelpFormat::Table => write!(f, "table"),
            HelpFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for HelpFormat {
    type Err = CmdFireError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(HelpFormat::Plain),
            "table" => Ok(HelpFormat::Table),
            "json" => Ok(HelpFormat::Json),
            _ => Err(CmdFireError::InvalidInput(format!(
                "Invalid output format '{}'. Must be 'plain', 'table' or 'json'",
                s
            ))),
        }
    }
}

/// Settings controlling how help and messages are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HelpStyle {
    pub layout: HelpLayout,
    pub format: HelpFormat,
    pub color: bool,
}

#[derive(Serialize)]
struct CommandEntry<'a> {
    identifier: &'a str,
    name: &'a str,
    usage: &'a str,
    description: &'a str,
}

#[derive(Serialize)]
struct HelpListing<'a> {
    commands: Vec<CommandEntry<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notice: Option<&'static str>,
}

/// Render the help listing for `commands`
///
/// The JSON format is an object with a `commands` array; an empty registry
/// also carries a `notice` field holding [`EMPTY_NOTICE`].
pub fn format_help(commands: &[Command], style: &HelpStyle) -> Result<String> {
    match style.format {
        HelpFormat::Plain => Ok(format_plain(commands, style.layout)),
        HelpFormat::Table => Ok(format_table(commands, style)),
        HelpFormat::Json => {
            let listing = HelpListing {
                commands: commands
                    .iter()
                    .map(|c| CommandEntry {
                        identifier: c.identifier(),
                        name: c.name(),
                        usage: c.usage(),
                        description: c.description(),
                    })
                    .collect(),
                notice: commands.is_empty().then_some(EMPTY_NOTICE),
            };
            let mut output = serde_json::to_string_pretty(&listing)?;
            output.push('\n');
            Ok(output)
        }
    }
}

fn format_plain(commands: &[Command], layout: HelpLayout) -> String {
    let mut output = String::from("\nCommand List:\n");

    if commands.is_empty() {
        output.push_str(EMPTY_NOTICE);
        output.push('\n');
    } else {
        output.push_str(&format!("Reference: {}\n", layout.reference()));
        for command in commands {
            output.push_str(&layout.line(command));
            output.push('\n');
        }
    }

    output.push_str("\n\n");
    output
}

fn format_table(commands: &[Command], style: &HelpStyle) -> String {
    let title = if style.color {
        "Command List:".bold().to_string()
    } else {
        "Command List:".to_string()
    };

    if commands.is_empty() {
        return format!("{}\n{}\n", title, EMPTY_NOTICE);
    }

    let paint = |s: &str| {
        if style.color {
            s.cyan().to_string()
        } else {
            s.to_string()
        }
    };

    let table = match style.layout {
        HelpLayout::Named => {
            #[derive(Tabled)]
            struct NamedRow {
                #[tabled(rename = "Name")]
                name: String,
                #[tabled(rename = "Identifier")]
                identifier: String,
                #[tabled(rename = "Usage")]
                usage: String,
            }

            let rows = commands.iter().map(|c| NamedRow {
                name: c.name().to_string(),
                identifier: paint(c.identifier()),
                usage: c.usage().to_string(),
            });
            Table::new(rows).with(Style::rounded()).to_string()
        }
        HelpLayout::Described => {
            #[derive(Tabled)]
            struct DescribedRow {
                #[tabled(rename = "Identifier")]
                identifier: String,
                #[tabled(rename = "Usage")]
                usage: String,
                #[tabled(rename = "Description")]
                description: String,
            }

            let rows = commands.iter().map(|c| DescribedRow {
                identifier: paint(c.identifier()),
                usage: c.usage().to_string(),
                description: c.description().to_string(),
            });
            Table::new(rows).with(Style::rounded()).to_string()
        }
    };

    format!("{}\n{}\n", title, table)
}

/// Format the message shown when no command matches `identifier`
pub fn format_not_found(identifier: &str, color: bool) -> String {
    let prefix = if color {
        "Command not found:".red().bold().to_string()
    } else {
        "Command not found:".to_string()
    };

    format!(
        "{} {}. Use '{}' to list available commands.",
        prefix, identifier, HELP_IDENTIFIER
    )
}
