//! Exit codes and side effects of the `sunbright` binary.
//!
//! `touch` stands in for the external programs: every argument it receives
//! becomes a file in the working directory, so a `setvcp` file means the
//! brightness command ran.
#![cfg(unix)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::{TempDir, tempdir};

fn write_config(dir: &Path, brightness_command: &str, theme_command: &str) {
    fs::write(
        dir.join("sunbright.toml"),
        format!(
            "brightness_command = \"{brightness_command}\"\ntheme_command = \"{theme_command}\"\n"
        ),
    )
    .unwrap();
}

fn workspace(brightness_command: &str, theme_command: &str) -> TempDir {
    let dir = tempdir().unwrap();
    write_config(dir.path(), brightness_command, theme_command);
    dir
}

fn run(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sunbright"))
        .arg("--config")
        .arg(dir.path())
        .args(args)
        .current_dir(dir.path())
        .output()
        .unwrap()
}

fn brightness_command_ran(dir: &TempDir) -> bool {
    dir.path().join("setvcp").exists()
}

#[test]
fn test_malformed_latitude_exits_with_failure() {
    let dir = workspace("touch", "touch");

    let output = run(&dir, &["abc", "13.4"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!brightness_command_ran(&dir));
}

#[test]
fn test_missing_coordinates_exit_with_failure() {
    let dir = workspace("touch", "touch");
    assert_eq!(run(&dir, &[]).status.code(), Some(1));
    assert_eq!(run(&dir, &["52.5"]).status.code(), Some(1));
    assert!(!brightness_command_ran(&dir));
}

#[test]
fn test_out_of_range_coordinates_exit_with_failure() {
    let dir = workspace("touch", "touch");

    let output = run(&dir, &["95", "13.4"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!brightness_command_ran(&dir));
}

#[test]
fn test_dry_run_succeeds_without_running_commands() {
    let dir = workspace("touch", "touch");

    let output = run(&dir, &["--dry-run", "52.5", "13.4"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(!brightness_command_ran(&dir));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Sun altitude:"));
    assert!(stdout.contains("Brightness would be set to"));
}

#[test]
fn test_successful_run_applies_both_settings() {
    let dir = workspace("touch", "touch");

    let output = run(&dir, &["--at", "2024-06-21 12:00:00", "52.5", "13.4"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(brightness_command_ran(&dir));
    assert!(
        dir.path().join("BreezeLight").exists() || dir.path().join("BreezeDark").exists()
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Brightness set to"));
    assert!(stdout.contains("Theme set to"));
}

#[test]
fn test_missing_brightness_program_exits_with_failure() {
    let dir = workspace("sunbright-missing-brightness-tool", "touch");

    let output = run(&dir, &["52.5", "13.4"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("BreezeLight").exists());
    assert!(!dir.path().join("BreezeDark").exists());
    assert!(String::from_utf8_lossy(&output.stdout).contains("not installed"));
}

#[test]
fn test_failing_theme_program_exits_with_failure() {
    let dir = workspace("touch", "false");

    let output = run(&dir, &["52.5", "13.4"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(brightness_command_ran(&dir));
}

#[test]
fn test_invalid_config_exits_with_failure() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("sunbright.toml"), "min_brightness = 150\n").unwrap();

    let output = run(&dir, &["52.5", "13.4"]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_help_and_version_exit_successfully() {
    let dir = workspace("touch", "touch");
    assert_eq!(run(&dir, &["--help"]).status.code(), Some(0));
    assert_eq!(run(&dir, &["--version"]).status.code(), Some(0));
}
