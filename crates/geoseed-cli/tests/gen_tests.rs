//! Integration tests for `geoseed gen` — the generator contract.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn geoseed() -> Command {
    Command::cargo_bin("geoseed").unwrap()
}

const EXPECTED_GEOJSON: &str = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},"properties":{}}]}"#;

#[test]
fn gen_without_directory_prints_usage_and_exits_zero() {
    let temp = TempDir::new().unwrap();

    geoseed()
        .current_dir(temp.path())
        .arg("gen")
        .assert()
        .success()
        .stdout("usage: geoseed gen output_dir\n");

    // No files were produced.
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn gen_creates_directory_with_exactly_two_files() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("fixtures");

    geoseed().arg("gen").arg(&out).assert().success();

    assert!(out.is_dir());
    let mut names: Vec<_> = std::fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, vec!["sample.geojson", "sample.tif"]);
}

#[test]
fn gen_creates_missing_parent_directories() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("a/b/c");

    geoseed().arg("gen").arg(&out).assert().success();
    assert!(out.join("sample.geojson").is_file());
}

#[test]
fn generated_geojson_deep_equals_the_fixture_document() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");

    geoseed().arg("gen").arg(&out).assert().success();

    let raw = std::fs::read_to_string(out.join("sample.geojson")).unwrap();
    let actual: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let expected: serde_json::Value = serde_json::from_str(EXPECTED_GEOJSON).unwrap();
    assert_eq!(actual, expected);

    // The on-disk encoding is the exact compact byte sequence, too.
    assert_eq!(raw, EXPECTED_GEOJSON);
}

#[test]
fn generated_raster_placeholder_is_zero_bytes() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");

    geoseed().arg("gen").arg(&out).assert().success();

    let meta = std::fs::metadata(out.join("sample.tif")).unwrap();
    assert_eq!(meta.len(), 0);
}

#[test]
fn rerunning_gen_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");

    geoseed().arg("gen").arg(&out).assert().success();
    let first = std::fs::read(out.join("sample.geojson")).unwrap();

    geoseed().arg("gen").arg(&out).assert().success();
    let second = std::fs::read(out.join("sample.geojson")).unwrap();

    assert_eq!(first, second);
    assert_eq!(std::fs::read_dir(&out).unwrap().count(), 2);
}

#[test]
fn gen_over_an_existing_regular_file_fails_with_internal_exit_code() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();

    geoseed()
        .arg("gen")
        .arg(&blocker)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("filesystem error"));

    // The blocker is untouched and no samples appeared next to it.
    assert_eq!(std::fs::read(&blocker).unwrap(), b"not a directory");
    assert!(!temp.path().join("blocker/sample.geojson").exists());
}

#[test]
fn gen_ignores_extra_directory_arguments() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("first");
    let second = temp.path().join("second");

    geoseed()
        .arg("gen")
        .arg(&first)
        .arg(&second)
        .assert()
        .success();

    assert!(first.join("sample.geojson").is_file());
    assert!(!second.exists());
}

#[test]
fn gen_quiet_writes_files_without_stdout_noise() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");

    geoseed()
        .arg("--quiet")
        .arg("gen")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(out.join("sample.tif").is_file());
}

#[test]
fn help_mentions_the_gen_command() {
    geoseed()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("gen"))
        .stdout(predicate::str::contains("scan"));
}

#[test]
fn version_matches_cargo() {
    geoseed()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
