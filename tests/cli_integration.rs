use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A datacheat command with its config dir pointed at `dir`.
fn datacheat(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("datacheat").unwrap();
    cmd.env("DATACHEAT_CONFIG_DIR", dir.path())
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0");
    cmd
}

#[test]
fn lists_sql_by_default() {
    let dir = tempfile::tempdir().unwrap();
    datacheat(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Basic Queries"))
        .stdout(predicate::str::contains("SQL Basics"))
        .stdout(predicate::str::contains("Quick access"));
}

#[test]
fn list_switches_language() {
    let dir = tempfile::tempdir().unwrap();
    datacheat(&dir)
        .args(["list", "-l", "dax"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Basic DAX Calculations"))
        .stdout(predicate::str::contains("Basic Queries").not());
}

#[test]
fn list_filters_by_search() {
    let dir = tempfile::tempdir().unwrap();
    datacheat(&dir)
        .args(["ls", "-s", "zzzz-no-such-text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries match."));
}

#[test]
fn search_spans_languages() {
    let dir = tempfile::tempdir().unwrap();
    datacheat(&dir)
        .args(["search", "time", "intelligence"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Time Intelligence"))
        .stdout(predicate::str::contains("(DAX)"));
}

#[test]
fn view_shows_code() {
    let dir = tempfile::tempdir().unwrap();
    datacheat(&dir)
        .args(["view", "joins"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Joins and Combining Data"))
        .stdout(predicate::str::contains("│"))
        .stdout(predicate::str::contains("JOIN"));
}

#[test]
fn view_reports_partial_misses() {
    let dir = tempfile::tempdir().unwrap();
    datacheat(&dir)
        .args(["view", "joins", "nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry with id 'nope'"));
}

#[test]
fn view_unknown_id_fails() {
    let dir = tempfile::tempdir().unwrap();
    datacheat(&dir)
        .args(["view", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry not found"));
}

#[test]
fn unknown_language_fails() {
    let dir = tempfile::tempdir().unwrap();
    datacheat(&dir)
        .args(["list", "-l", "cobol"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown language: cobol"));
}

#[test]
fn json_output_is_parseable() {
    let dir = tempfile::tempdir().unwrap();
    let output = datacheat(&dir)
        .args(["list", "-l", "sql", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let groups = value["groups"].as_array().unwrap();
    assert!(!groups.is_empty());
    assert_eq!(groups[0]["language"], "sql");

    let shortcuts: Vec<&str> = value["shortcuts"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["id"].as_str())
        .collect();
    assert!(shortcuts.contains(&"real-world-sql"));
    assert!(shortcuts.contains(&"sql-function-index"));
}

#[test]
fn quick_lists_and_opens_shortcuts() {
    let dir = tempfile::tempdir().unwrap();
    datacheat(&dir)
        .arg("quick")
        .assert()
        .success()
        .stdout(predicate::str::contains("real-world-sql"))
        .stdout(predicate::str::contains("Function Index"));

    datacheat(&dir)
        .args(["quick", "real-world-sql"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Real-World"));

    datacheat(&dir)
        .args(["quick", "joins"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry not found"));
}

#[test]
fn languages_lists_all_three() {
    let dir = tempfile::tempdir().unwrap();
    datacheat(&dir)
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("SQL"))
        .stdout(predicate::str::contains("Power Query"))
        .stdout(predicate::str::contains("DAX"));
}

#[test]
fn config_set_and_get() {
    let dir = tempfile::tempdir().unwrap();
    datacheat(&dir)
        .args(["config", "default-language", "dax"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default-language set to dax"));

    datacheat(&dir)
        .args(["config", "default-language"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dax"));

    datacheat(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("preview-width"));

    // the configured language is now the default
    datacheat(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Basic DAX Calculations"));
}

#[test]
fn broken_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();
    datacheat(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Basic Queries"))
        .stderr(predicate::str::contains("Ignoring broken config"));
}

#[test]
fn browse_scripted_session() {
    let dir = tempfile::tempdir().unwrap();
    datacheat(&dir)
        .args(["config", "loading-delay-ms", "0"])
        .assert()
        .success();

    datacheat(&dir)
        .arg("browse")
        .write_stdin("1\nin\nbg\n:lang pq\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loading DLC..."))
        .stdout(predicate::str::contains("Basic Queries"))
        .stdout(predicate::str::contains("x close"))
        .stdout(predicate::str::contains("Basic Power Query Operations"));
}

#[test]
fn grouped_help() {
    let dir = tempfile::tempdir().unwrap();
    datacheat(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Core Commands:"))
        .stdout(predicate::str::contains("browse"));
}
