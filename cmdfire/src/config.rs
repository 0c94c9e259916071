//! CLI configuration management
//!
//! Handles loading CLI-specific configuration.

use anyhow::{Context, Result};
use cmdfire_core::{default_config_path, HelpFormat, HelpLayout};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_FORMAT: &str = "CMDFIRE_FORMAT";
pub const ENV_LAYOUT: &str = "CMDFIRE_LAYOUT";
pub const ENV_VERBOSE: &str = "CMDFIRE_VERBOSE";
pub const ENV_COLOR: &str = "CMDFIRE_COLOR";
pub const ENV_HELP_ON_EMPTY: &str = "CMDFIRE_HELP_ON_EMPTY";

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CliConfig {
    /// Help output format
    pub output_format: HelpFormat,

    /// Fields shown on each help line
    pub layout: HelpLayout,

    /// Enable verbose logging by default
    pub verbose: bool,

    /// Colorize output when writing to a terminal
    pub color: bool,

    /// Print help when invoked without a command
    pub help_on_empty: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output_format: HelpFormat::Plain,
            layout: HelpLayout::Named,
            verbose: false,
            color: true,
            help_on_empty: true,
        }
    }
}

impl CliConfig {
    /// Serialize as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize CLI config")
    }

    /// Get the default configuration file path
    pub fn config_path() -> PathBuf {
        default_config_path()
    }

    /// Create a new builder for constructing configuration
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Keys present in a config file; absent keys stay `None`
#[derive(Debug, Deserialize)]
struct FileLayer {
    output_format: Option<HelpFormat>,
    layout: Option<HelpLayout>,
    verbose: Option<bool>,
    color: Option<bool>,
    help_on_empty: Option<bool>,
}

impl FileLayer {
    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read CLI config file {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse CLI config file {}", path.display()))
    }
}

/// Builder for CLI configuration with validation and priority chain support
///
/// Priority chain (lowest to highest):
/// 1. Defaults
/// 2. Config file
/// 3. Environment variables
/// 4. CLI arguments
///
/// Each layer overwrites only the values it sets, so layers must be applied
/// in that order.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    output_format: Option<HelpFormat>,
    layout: Option<HelpLayout>,
    verbose: Option<bool>,
    color: Option<bool>,
    help_on_empty: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set output format
    pub fn with_output_format(mut self, format: HelpFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    /// Set help layout
    pub fn with_layout(mut self, layout: HelpLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Set verbose flag
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Set color flag
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = Some(color);
        self
    }

    /// Set whether an empty invocation prints help
    pub fn with_help_on_empty(mut self, help_on_empty: bool) -> Self {
        self.help_on_empty = Some(help_on_empty);
        self
    }

    /// Apply values from a config file
    ///
    /// Only keys present in the file overwrite what the builder holds. With
    /// `None`, the default path is used and may be absent. An explicit path
    /// must exist. A file that exists but cannot be parsed is an error either
    /// way.
    pub fn with_config_file(self, path: Option<&Path>) -> Result<Self> {
        let layer = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(anyhow::anyhow!(
                        "Config file not found: {}",
                        path.display()
                    ));
                }
                FileLayer::read(path)?
            }
            None => {
                let path = CliConfig::config_path();
                if !path.exists() {
                    return Ok(self);
                }
                FileLayer::read(&path)?
            }
        };

        Ok(self.merge(layer))
    }

    fn merge(mut self, layer: FileLayer) -> Self {
        self.output_format = layer.output_format.or(self.output_format);
        self.layout = layer.layout.or(self.layout);
        self.verbose = layer.verbose.or(self.verbose);
        self.color = layer.color.or(self.color);
        self.help_on_empty = layer.help_on_empty.or(self.help_on_empty);
        self
    }

    /// Apply environment variable overrides
    ///
    /// Invalid values are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(format) = std::env::var(ENV_FORMAT) {
            if let Ok(format) = format.parse::<HelpFormat>() {
                self.output_format = Some(format);
            }
        }

        if let Ok(layout) = std::env::var(ENV_LAYOUT) {
            if let Ok(layout) = layout.parse::<HelpLayout>() {
                self.layout = Some(layout);
            }
        }

        if let Some(verbose) = env_flag(ENV_VERBOSE) {
            self.verbose = Some(verbose);
        }

        if let Some(color) = env_flag(ENV_COLOR) {
            self.color = Some(color);
        }

        if let Some(help_on_empty) = env_flag(ENV_HELP_ON_EMPTY) {
            self.help_on_empty = Some(help_on_empty);
        }

        self
    }

    /// Build the final configuration
    pub fn build(self) -> CliConfig {
        let defaults = CliConfig::default();

        CliConfig {
            output_format: self.output_format.unwrap_or(defaults.output_format),
            layout: self.layout.unwrap_or(defaults.layout),
            verbose: self.verbose.unwrap_or(defaults.verbose),
            color: self.color.unwrap_or(defaults.color),
            help_on_empty: self.help_on_empty.unwrap_or(defaults.help_on_empty),
        }
    }
}

fn env_flag(key: &str) -> Option<bool> {
    std::env::var(key).ok().and_then(|value| parse_flag(&value))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
