//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("ping"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("public"));
}

#[test]
fn test_ping_help() {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("ping").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage: roster ping"));
}

#[test]
fn test_ping_unreachable_database_fails() {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("ping")
        .env("DATABASE_HOST", "127.0.0.1")
        .env("DATABASE_PORT", "1")
        .timeout(std::time::Duration::from_secs(60));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to connect to database"));
}

#[test]
fn test_unknown_command_fails() {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("frobnicate");

    cmd.assert().failure();
}
