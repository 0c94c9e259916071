//! cmdfire CLI
//!
//! Looks up the command named by the first positional argument and fires it.

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use cmdfire::cli::{builtin_registry, Cli};
use cmdfire::config::CliConfig;
use cmdfire_core::{Dispatcher, HelpStyle};
use tracing::debug;

/// Exit code for handler failures and configuration errors
const FAILURE_EXIT_CODE: i32 = 1;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            std::process::exit(FAILURE_EXIT_CODE);
        }
    };

    init_tracing(config.verbose);
    debug!(?config, "Resolved configuration");

    let style = HelpStyle {
        layout: config.layout,
        format: config.output_format,
        color: config.color && std::io::stdout().is_terminal(),
    };

    let registry = builtin_registry(&config)?;
    let mut dispatcher = Dispatcher::stdout(registry).with_style(style);

    let exit_code = match dispatcher.init(config.help_on_empty, Some(cli.command)) {
        Ok(outcome) => {
            debug!(?outcome, "Dispatch finished");
            outcome.exit_code()
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if config.verbose {
                eprintln!("Error details: {:?}", e);
            }
            FAILURE_EXIT_CODE
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

/// Build configuration using priority chain: defaults → file → env → CLI args
fn resolve_config(cli: &Cli) -> Result<CliConfig> {
    let mut builder = CliConfig::builder();

    if !cli.no_config {
        builder = builder.with_config_file(cli.config.as_deref())?;
    }

    builder = builder.with_env_overrides();

    if let Some(format) = cli.format {
        builder = builder.with_output_format(format.into());
    }
    if let Some(layout) = cli.layout {
        builder = builder.with_layout(layout.into());
    }
    if cli.verbose {
        builder = builder.with_verbose(true);
    }
    if cli.no_color {
        builder = builder.with_color(false);
    }
    if cli.quiet_empty {
        builder = builder.with_help_on_empty(false);
    }

    Ok(builder.build())
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // stdout belongs to the commands
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
