//! End-to-end tests for the rlox-scanner binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn scanner_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_rlox-scanner"))
}

fn scanner() -> Command {
    let mut cmd = Command::new(scanner_bin());
    cmd.env_remove("RLOX_SCANNER_VERBOSE")
        .env_remove("RLOX_SCANNER_NO_COLOR")
        .env_remove("RUST_LOG");
    cmd
}

fn write_source(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("input.lox");
    std::fs::write(&path, contents).expect("Failed to write source file");
    path
}

#[test]
fn test_cli_help() {
    scanner()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version() {
    scanner()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_missing_file_argument() {
    scanner()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("USAGE: rlox-scanner <FILE>"))
        .stderr(predicate::str::contains("[ERROR] no <FILE> is provided"));
}

#[test]
fn test_cli_unreadable_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("missing.lox");

    scanner()
        .arg(&missing)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("[ERROR] failed to read"));
}

#[test]
fn test_cli_prints_tokens() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_source(&temp_dir, "var x = 42\nif (x >= 3.5) \"yes\"\n");

    let expected = "\
Token: VAR, literal: None, line: 1
Token: IDENTIFIER, literal: x, line: 1
Token: EQUAL, literal: None, line: 1
Token: NUMBER, literal: 42.0, line: 1
Token: IF, literal: None, line: 2
Token: LEFT_PAREN, literal: None, line: 2
Token: IDENTIFIER, literal: x, line: 2
Token: GREATER_EQUAL, literal: None, line: 2
Token: NUMBER, literal: 3.5, line: 2
Token: RIGHT_PAREN, literal: None, line: 2
Token: STRING, literal: yes, line: 2
";

    scanner()
        .arg(&path)
        .assert()
        .success()
        .stdout(expected)
        .stderr(predicate::str::contains("[ERROR]").not());
}

#[test]
fn test_cli_recoverable_error_keeps_scanning() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_source(&temp_dir, "@+");

    scanner()
        .arg(&path)
        .assert()
        .success()
        .stdout("Token: PLUS, literal: None, line: 1\n")
        .stderr(predicate::str::contains(
            "[ERROR] unexpected token `@` at line 1",
        ));
}

#[test]
fn test_cli_unterminated_string_is_fatal() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_source(&temp_dir, "a\n\"abc\nb");

    scanner()
        .arg(&path)
        .assert()
        .code(1)
        .stdout("Token: IDENTIFIER, literal: a, line: 1\n")
        .stderr(predicate::str::contains(
            "[ERROR] unterminated string at line 2",
        ));
}

#[test]
fn test_cli_same_input_same_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_source(&temp_dir, "function f() { nil or true }\n");

    let run = |path: &Path| scanner().arg(path).output().expect("Failed to run scanner");
    let first = run(&path);
    let second = run(&path);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}
