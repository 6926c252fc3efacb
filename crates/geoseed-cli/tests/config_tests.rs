//! Integration tests for `geoseed init` and `geoseed config`.
//!
//! Every invocation pins `--config` to a temp path so the tests never touch
//! the developer's real configuration.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn geoseed() -> Command {
    Command::cargo_bin("geoseed").unwrap()
}

#[test]
fn init_creates_a_config_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");

    geoseed()
        .arg("init")
        .args(["--config"])
        .arg(&config)
        .assert()
        .success();

    let text = std::fs::read_to_string(&config).unwrap();
    assert!(text.contains("[output]"));
    assert!(text.contains("[scan]"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    std::fs::write(&config, "# sentinel\n[output]\nno_color = true\n").unwrap();

    geoseed()
        .arg("init")
        .args(["--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    // Untouched.
    assert!(std::fs::read_to_string(&config).unwrap().contains("sentinel"));
}

#[test]
fn init_force_overwrites() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    std::fs::write(&config, "# sentinel\n").unwrap();

    geoseed()
        .arg("init")
        .arg("--force")
        .args(["--config"])
        .arg(&config)
        .assert()
        .success();

    assert!(!std::fs::read_to_string(&config).unwrap().contains("sentinel"));
}

#[test]
fn config_get_reads_a_known_key() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");

    geoseed()
        .arg("init")
        .args(["--config"])
        .arg(&config)
        .assert()
        .success();

    geoseed()
        .args(["config", "get", "output.format", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("output.format = human"));
}

#[test]
fn config_get_unknown_key_exits_with_configuration_code() {
    geoseed()
        .args(["config", "get", "does.not.exist"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn config_set_round_trips_through_the_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");

    geoseed()
        .arg("init")
        .args(["--config"])
        .arg(&config)
        .assert()
        .success();

    geoseed()
        .args(["config", "set", "scan.follow_links", "true", "--config"])
        .arg(&config)
        .assert()
        .success();

    geoseed()
        .args(["config", "get", "scan.follow_links", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("scan.follow_links = true"));
}

#[test]
fn config_set_rejects_non_boolean_values() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");

    geoseed()
        .arg("init")
        .args(["--config"])
        .arg(&config)
        .assert()
        .success();

    geoseed()
        .args(["config", "set", "output.no_color", "maybe", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("expects true or false"));
}

#[test]
fn config_path_honors_the_config_flag() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");

    geoseed()
        .arg("init")
        .args(["--config"])
        .arg(&config)
        .assert()
        .success();

    geoseed()
        .args(["config", "path", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn missing_named_config_falls_back_to_defaults() {
    let temp = TempDir::new().unwrap();

    geoseed()
        .arg("scan")
        .arg(temp.path())
        .args(["--config"])
        .arg(temp.path().join("nope.toml"))
        .assert()
        .success();
}

#[test]
fn malformed_config_file_exits_with_configuration_code() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    std::fs::write(&config, "[output\nno_color =").unwrap();

    geoseed()
        .arg("scan")
        .arg(temp.path())
        .args(["--config"])
        .arg(&config)
        .assert()
        .failure()
        .code(4);
}
