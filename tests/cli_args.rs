//! Integration tests for CLI argument handling and REPL startup
//!
//! Every test here runs the built binary fully offline: only commands that
//! never reach the network are typed into the prompt.

use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Helper to run the CLI with given args, stdin closed, and capture output
fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pokedex"))
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute pokedex")
}

/// Helper to run the REPL, feed it `input`, and capture output
fn run_repl(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_pokedex"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn pokedex");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(input.as_bytes())
        .expect("Failed to write to stdin");

    child
        .wait_with_output()
        .expect("Failed to wait for pokedex")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pokedex"), "Help should mention pokedex");
    assert!(
        stdout.contains("cache-ttl"),
        "Help should mention --cache-ttl flag"
    );
}

#[test]
fn test_version_flag_exits_successfully() {
    let output = run_cli(&["--version"]);
    assert!(output.status.success());
}

#[test]
fn test_zero_cache_ttl_is_rejected() {
    let output = run_cli(&["--cache-ttl", "0"]);
    assert!(
        !output.status.success(),
        "Expected a zero cache TTL to be rejected"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("cache-ttl"),
        "Should name the offending flag: {}",
        stderr
    );
}

#[test]
fn test_non_numeric_cache_ttl_is_rejected() {
    let output = run_cli(&["--cache-ttl", "soon"]);
    assert!(!output.status.success());
}

#[test]
fn test_repl_exits_cleanly_on_eof() {
    let output = run_cli(&[]);
    assert!(
        output.status.success(),
        "Expected a clean exit on end of input"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("pokedex > "),
        "Should have printed the prompt: {}",
        stdout
    );
}

#[test]
fn test_exit_command_says_goodbye() {
    let output = run_repl("exit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Closing the Pokedex... Goodbye!"),
        "Should print the goodbye line: {}",
        stdout
    );
}

#[test]
fn test_unknown_command_prints_hint_and_continues() {
    let output = run_repl("blorp\nexit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Invalid command"),
        "Should flag the unknown command: {}",
        stdout
    );
    assert!(
        stdout.contains("Goodbye"),
        "The loop should survive an unknown command: {}",
        stdout
    );
}

#[test]
fn test_help_command_lists_all_commands() {
    let output = run_repl("help\nexit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Welcome to the Pokedex!"));
    for command in ["map", "mapb", "explore", "catch", "inspect", "pokedex"] {
        assert!(
            stdout.contains(command),
            "Help should list the {} command: {}",
            command,
            stdout
        );
    }
}

#[test]
fn test_mapb_before_map_reports_start_of_map() {
    let output = run_repl("mapb\nexit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Error: already at the beginning of the map"),
        "Should report the start-of-map error: {}",
        stdout
    );
}

#[test]
fn test_catch_without_argument_reports_usage() {
    let output = run_repl("catch\nexit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Error: no pokemon specified"),
        "Should report the missing argument: {}",
        stdout
    );
}

#[test]
fn test_pokedex_starts_empty() {
    let output = run_repl("pokedex\nexit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("you have not caught any pokemon"),
        "A fresh session has an empty pokedex: {}",
        stdout
    );
}
