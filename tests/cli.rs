//! End-to-end tests for the `whatidid` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

// Friday 2026-10-16 10:00
const NOW: &str = "2026-10-16T10:00:00";

fn whatidid(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("whatidid").unwrap();
    cmd.env("WHATIDID_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn analyze_json(home: &TempDir, text: &str) -> Value {
    let output = whatidid(home)
        .args(["-o", "json", "analyze", "--now", NOW, text])
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn analyze_gym_yesterday() {
    let home = TempDir::new().unwrap();
    let value = analyze_json(&home, "I went to the gym yesterday");

    assert_eq!(value["title"], "I went to the gym yesterday");
    assert_eq!(value["category"], "Exercise");
    assert_eq!(value["date"], "2026-10-15T10:00:00");
}

#[test]
fn analyze_last_monday() {
    let home = TempDir::new().unwrap();
    let value = analyze_json(&home, "last Monday I did a work report");

    assert_eq!(value["category"], "Work");
    assert_eq!(value["date"], "2026-10-12T10:00:00");
}

#[test]
fn analyze_last_weekday_with_time() {
    let home = TempDir::new().unwrap();
    let value = analyze_json(&home, "last friday at 3pm I went for a run");

    assert_eq!(value["category"], "Exercise");
    assert_eq!(value["date"], "2026-10-09T15:00:00");
}

#[test]
fn analyze_absolute_date_wins() {
    let home = TempDir::new().unwrap();
    let value = analyze_json(&home, "Swam on dec 15 and again tomorrow");

    assert_eq!(value["date"], "2026-12-15T00:00:00");
}

#[test]
fn analyze_without_match_uses_default_category() {
    let home = TempDir::new().unwrap();
    let value = analyze_json(&home, "called mom");

    assert_eq!(value["category"], "Other");
    assert_eq!(value["category_defaulted"], true);
    assert!(value["date"].is_null());
}

#[test]
fn analyze_joins_words() {
    let home = TempDir::new().unwrap();
    whatidid(&home)
        .args(["analyze", "--now", NOW, "read", "a", "book", "today"])
        .assert()
        .success()
        .stdout(predicate::str::contains("read a book today"))
        .stdout(predicate::str::contains("Reading"))
        .stdout(predicate::str::contains("Fri 2026-10-16 10:00"));
}

#[test]
fn analyze_with_progress_bar() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("config.yaml"),
        "progress:\n  stages: 4\n  interval_ms: 0\n",
    )
    .unwrap();

    whatidid(&home)
        .args(["analyze", "--progress", "--now", NOW, "yoga"])
        .assert()
        .success()
        .stderr(predicate::str::contains("100%"))
        .stdout(predicate::str::contains("Mindfulness"));
}

#[test]
fn config_keywords_and_policy_apply() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("config.yaml"),
        "general:\n  default_output: json\nanalysis:\n  same_weekday: today\n  keywords:\n    pottery: Home\n",
    )
    .unwrap();

    let output = whatidid(&home)
        .args(["analyze", "--now", NOW, "pottery next friday"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["category"], "Home");
    assert_eq!(value["date"], NOW);
}

#[test]
fn invalid_now_is_rejected() {
    let home = TempDir::new().unwrap();
    whatidid(&home)
        .args(["analyze", "--now", "soon", "work"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--now"));
}

#[test]
fn malformed_config_is_reported() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.yaml"), "analysis: [oops").unwrap();

    whatidid(&home)
        .arg("categories")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn categories_lists_all() {
    let home = TempDir::new().unwrap();
    whatidid(&home)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Categories (7)"))
        .stdout(predicate::str::contains("Mindfulness"));
}

#[test]
fn keywords_filter_by_category() {
    let home = TempDir::new().unwrap();
    let output = whatidid(&home)
        .args(["keywords", "--category", "reading", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = value["items"].as_array().unwrap();
    assert!(items.iter().any(|i| i["keyword"] == "book"));
    assert!(items.iter().all(|i| i["category"] == "Reading"));
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    whatidid(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("whatidid"));
}
