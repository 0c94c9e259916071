//! Built-in commands of the `cmdfire` binary

use std::io::Write;

use anyhow::{anyhow, Context};
use clap::{Arg, ArgAction};
use clap_complete::Shell;
use cmdfire_core::{help_command, Command, CommandRegistry, Dispatcher};
use tracing::debug;

use crate::config::CliConfig;

/// Binary name used in generated completions
pub const BIN_NAME: &str = "cmdfire";

/// Commands registered by the binary, in listing order
pub fn builtin_commands(config: &CliConfig) -> Vec<Command> {
    let config = config.clone();

    vec![
        help_command(),
        Command::builder("greet", handle_greet)
            .name("Greet")
            .usage("<name>")
            .description("Print a greeting")
            .build(),
        Command::builder("echo", handle_echo)
            .name("Echo")
            .usage("[args...]")
            .description("Print the arguments separated by spaces")
            .build(),
        Command::builder("version", handle_version)
            .name("Version")
            .description("Print the program version")
            .build(),
        Command::builder("config", move |ctx, _| handle_config(ctx, &config))
            .name("Config")
            .description("Print the effective configuration as TOML")
            .build(),
        Command::builder("completion", handle_completion)
            .name("Completion")
            .usage("<shell>")
            .description("Generate shell completions for the registered commands")
            .build(),
    ]
}

/// Registry holding every built-in command
///
/// Built-ins are registered strictly, so a clashing definition fails fast.
pub fn builtin_registry(config: &CliConfig) -> cmdfire_core::Result<CommandRegistry> {
    let mut registry = CommandRegistry::new();
    for command in builtin_commands(config) {
        registry.try_register(command)?;
    }
    debug!(count = registry.len(), "Registered built-in commands");
    Ok(registry)
}

/// Handle greet command
pub fn handle_greet(ctx: &mut Dispatcher, args: &[String]) -> anyhow::Result<()> {
    let name = args.first().ok_or_else(|| anyhow!("missing <name> argument"))?;
    writeln!(ctx.out(), "Hello, {}", name)?;
    Ok(())
}

/// Handle echo command
pub fn handle_echo(ctx: &mut Dispatcher, args: &[String]) -> anyhow::Result<()> {
    writeln!(ctx.out(), "{}", args.join(" "))?;
    Ok(())
}

/// Handle version command
pub fn handle_version(ctx: &mut Dispatcher, _args: &[String]) -> anyhow::Result<()> {
    writeln!(ctx.out(), "{} {}", BIN_NAME, env!("CARGO_PKG_VERSION"))?;
    Ok(())
}

/// Handle config command
pub fn handle_config(ctx: &mut Dispatcher, config: &CliConfig) -> anyhow::Result<()> {
    let rendered = config.to_toml()?;
    write!(ctx.out(), "{}", rendered)?;
    Ok(())
}

/// Handle completion command
pub fn handle_completion(ctx: &mut Dispatcher, args: &[String]) -> anyhow::Result<()> {
    let shell = args.first().ok_or_else(|| anyhow!("missing <shell> argument"))?;
    let shell: Shell = shell
        .parse()
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("Unsupported shell '{}'", shell))?;

    let mut cmd = completion_command(ctx.get_all_commands());
    clap_complete::generate(shell, &mut cmd, BIN_NAME, ctx.out());
    Ok(())
}

/// Build a clap command tree mirroring the registry, for completion scripts
pub fn completion_command(commands: &[Command]) -> clap::Command {
    commands.iter().fold(
        clap::Command::new(BIN_NAME)
            .disable_help_subcommand(true)
            .disable_help_flag(true),
        |root, command| {
            root.subcommand(
                clap::Command::new(command.identifier().to_string())
                    .about(command.description().to_string())
                    .arg(
                        Arg::new("args")
                            .value_name("ARGS")
                            .action(ArgAction::Append)
                            .num_args(0..)
                            .trailing_var_arg(true)
                            .allow_hyphen_values(true),
                    ),
            )
        },
    )
}
