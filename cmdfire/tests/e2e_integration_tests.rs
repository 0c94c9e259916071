//! End-to-End Integration Tests for the cmdfire binary
//!
//! These tests spawn the compiled binary and check what it prints and how it
//! exits, from argument capture through dispatch.

use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;

const ENV_KEYS: [&str; 6] = [
    "CMDFIRE_FORMAT",
    "CMDFIRE_LAYOUT",
    "CMDFIRE_VERBOSE",
    "CMDFIRE_COLOR",
    "CMDFIRE_HELP_ON_EMPTY",
    "RUST_LOG",
];

/// Build a command for the binary with a clean environment and no config file
fn cmdfire() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cmdfire"));
    for key in ENV_KEYS {
        cmd.env_remove(key);
    }
    cmd
}

fn run(args: &[&str]) -> Output {
    cmdfire()
        .arg("--no-config")
        .args(args)
        .output()
        .expect("failed to spawn cmdfire")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_greet_prints_greeting() {
    let output = run(&["greet", "World"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Hello, World\n");
}

#[test]
fn test_unknown_command_exits_with_lookup_code() {
    let output = run(&["bogus"]);

    assert_eq!(output.status.code(), Some(2));
    let out = stdout(&output);
    assert!(out.contains("bogus"));
    assert!(out.contains("help"));
    assert!(!out.contains("Hello"));
}

#[test]
fn test_handler_failure_exits_with_failure_code() {
    let output = run(&["greet"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("missing <name> argument"));
}

#[test]
fn test_no_command_prints_help() {
    let output = run(&[]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.starts_with("\nCommand List:\n"));
    assert!(out.contains("Reference: [command_name] command_identifier command_usage"));
    assert!(out.contains("[Help] help \n"));
    assert!(out.contains("[Greet] greet <name>\n"));
}

#[test]
fn test_help_command_matches_empty_invocation() {
    let empty = run(&[]);
    let help = run(&["help"]);

    assert_eq!(stdout(&empty), stdout(&help));
}

#[test]
fn test_quiet_empty_prints_nothing() {
    let output = run(&["--quiet-empty"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_arguments_pass_through_verbatim() {
    let output = run(&["echo", "-x", "--format", "json", "last"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "-x --format json last\n");
}

#[test]
fn test_described_layout() {
    let output = run(&["--layout", "described", "help"]);

    let out = stdout(&output);
    assert!(out.contains("Reference: command_identifier command_usage command_description"));
    assert!(out.contains("greet <name> Print a greeting\n"));
}

#[test]
fn test_json_format_lists_commands() {
    let output = run(&["-f", "json"]);

    let parsed: Value = serde_json::from_str(&stdout(&output)).expect("valid JSON help");
    let ids: Vec<_> = parsed["commands"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["identifier"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        ids,
        vec!["help", "greet", "echo", "version", "config", "completion"]
    );
}

#[test]
fn test_table_format() {
    let output = run(&["--format", "table", "help"]);

    let out = stdout(&output);
    assert!(out.starts_with("Command List:"));
    assert!(out.contains("Identifier"));
    assert!(out.contains("greet"));
}

#[test]
fn test_env_override() {
    let output = cmdfire()
        .args(["--no-config", "help"])
        .env("CMDFIRE_LAYOUT", "described")
        .output()
        .unwrap();

    assert!(stdout(&output).contains("greet <name> Print a greeting"));
}

#[test]
fn test_cli_flag_beats_env() {
    let output = cmdfire()
        .args(["--no-config", "--layout", "named", "help"])
        .env("CMDFIRE_LAYOUT", "described")
        .output()
        .unwrap();

    assert!(stdout(&output).contains("[Greet] greet <name>"));
}

fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("cli.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_config_file_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "help_on_empty = false\n");

    let output = cmdfire().arg("--config").arg(&path).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_config_command_reports_effective_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "layout = \"described\"\n");

    let output = cmdfire()
        .arg("--config")
        .arg(&path)
        .args(["--format", "table", "config"])
        .output()
        .unwrap();

    let out = stdout(&output);
    assert!(out.contains("layout = \"described\""));
    assert!(out.contains("output_format = \"table\""));
}

#[test]
fn test_invalid_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "output_format = \"xml\"\n");

    let output = cmdfire().arg("--config").arg(&path).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Configuration error"));
}

#[test]
fn test_completion_script() {
    let output = run(&["completion", "bash"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("cmdfire"));
    assert!(out.contains("greet"));
}

#[test]
fn test_version_command() {
    let output = run(&["version"]);

    assert_eq!(
        stdout(&output),
        format!("cmdfire {}\n", env!("CARGO_PKG_VERSION"))
    );
}
