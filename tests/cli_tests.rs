use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const VARS: [&str; 3] = ["PR_TOKEN", "TG_TOKEN", "TG_CHAT_ID"];

fn bot(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("homework-bot").expect("binary built");
    cmd.current_dir(dir.path());
    for var in VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn check_config_exits_with_config_code_when_env_missing() {
    let dir = tempfile::tempdir().expect("create temp dir");

    bot(&dir)
        .args(["check", "config"])
        .assert()
        .code(78)
        .stderr(predicate::str::contains("PR_TOKEN"))
        .stderr(predicate::str::contains("TG_CHAT_ID"));
}

#[test]
fn check_config_masks_tokens() {
    let dir = tempfile::tempdir().expect("create temp dir");

    bot(&dir)
        .args(["check", "config"])
        .env("PR_TOKEN", "y0_practicum_secret_token_value")
        .env("TG_TOKEN", "123456:telegram_secret_token")
        .env("TG_CHAT_ID", "12345")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is ready to use"))
        .stdout(predicate::str::contains("12345"))
        .stdout(predicate::str::contains("y0_practicum_secret_token_value").not())
        .stdout(predicate::str::contains("123456:telegram_secret_token").not());
}

#[test]
fn run_refuses_to_start_without_credentials() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = dir.path().join("bot.toml");
    fs::write(&config, "[logging]\nfile = \"bot.log\"\n").expect("write temp config");

    bot(&dir)
        .arg("--config")
        .arg(&config)
        .args(["run", "--dry-run"])
        .env("PR_TOKEN", "token")
        .assert()
        .code(78)
        .stderr(predicate::str::contains("TG_TOKEN"));

    let log = fs::read_to_string(dir.path().join("bot.log")).expect("log file written");
    assert!(log.contains("Required environment variables are missing"));
    assert!(log.contains("ERROR"));
}

#[test]
fn run_fails_on_missing_settings_file() {
    let dir = tempfile::tempdir().expect("create temp dir");

    bot(&dir)
        .args(["--config", "absent.toml", "run"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn run_rejects_invalid_log_level() {
    let dir = tempfile::tempdir().expect("create temp dir");

    bot(&dir)
        .args(["run", "--log-level", "app=notalevel"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("level"));
}
