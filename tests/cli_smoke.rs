use assert_cmd::prelude::*;
use chrono::{Duration, Local};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const SCRAPER: &str = "GitHub Action Scraper";

fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn init_git_repo(dir: &Path) {
    for args in [
        vec!["init"],
        vec!["config", "core.autocrlf", "false"],
        vec!["config", "user.email", "you@example.com"],
        vec!["config", "user.name", "Your Name"],
    ] {
        assert!(Command::new("git")
            .args(&args)
            .current_dir(dir)
            .status()
            .unwrap()
            .success());
    }
}

/// Append a line to `name` and commit it as `committer`, `days_ago` days back.
fn commit_file(dir: &Path, name: &str, committer: &str, days_ago: i64) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut f = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .unwrap();
    writeln!(f, "row,{days_ago}").unwrap();
    f.sync_all().unwrap();

    let date = (Local::now() - Duration::days(days_ago))
        .format("%Y-%m-%dT10:00:00")
        .to_string();

    assert!(Command::new("git")
        .args(["add", "."])
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
    assert!(Command::new("git")
        .args(["commit", "-m", &format!("update {name}")])
        .env("GIT_COMMITTER_NAME", committer)
        .env("GIT_COMMITTER_DATE", &date)
        .env("GIT_AUTHOR_DATE", &date)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

fn seeded_repo(dir: &Path) {
    init_git_repo(dir);
    File::create(dir.join("README.md")).unwrap();
    commit_file(dir, "data/ZH.csv", SCRAPER, 14);
    commit_file(dir, "data/ZH.csv", "Jane Doe", 10);
    commit_file(dir, "data/BE.csv", SCRAPER, 9);
    commit_file(dir, "data/ZH.csv", SCRAPER, 7);
    commit_file(dir, "data/ZH.csv", SCRAPER, 3);
}

fn cadence(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cadence").unwrap();
    cmd.args([
        "--repo",
        dir.to_str().unwrap(),
        "--offline",
        "--path-template",
        "data/{region}.csv",
    ]);
    cmd
}

#[test]
fn report_json_contains_histogram_and_prediction() {
    if !has_git() {
        eprintln!("git not available; skipping");
        return;
    }
    let dir = tempdir().unwrap();
    seeded_repo(dir.path());

    let output = cadence(dir.path())
        .args(["report", "ZH", "--json"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["region"], "ZH");
    assert_eq!(v["weeks"], 3);
    assert_eq!(v["commits"], 4);

    let histogram = v["histogram"].as_array().unwrap();
    assert_eq!(histogram.len(), 7);
    assert_eq!(histogram[0]["weekday"], "Monday");

    // four distinct dates, the first one only anchors the gaps
    let observations = v["observations"].as_array().unwrap();
    assert_eq!(observations.len(), 3);
    let counted: u64 = histogram
        .iter()
        .map(|row| row["scraper"].as_u64().unwrap() + row["other"].as_u64().unwrap())
        .sum();
    assert_eq!(counted, 3);

    assert!(v["prediction"].is_object());
    assert_eq!(v["prediction"]["status"], "Upcoming");
}

#[test]
fn report_text_shows_banner() {
    if !has_git() {
        eprintln!("git not available; skipping");
        return;
    }
    let dir = tempdir().unwrap();
    seeded_repo(dir.path());

    let output = cadence(dir.path()).args(["report", "zh"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Next commit expected on"));
    assert!(stdout.contains("Monday"));
}

#[test]
fn region_without_history_reports_not_enough_data() {
    if !has_git() {
        eprintln!("git not available; skipping");
        return;
    }
    let dir = tempdir().unwrap();
    seeded_repo(dir.path());

    let output = cadence(dir.path())
        .args(["report", "BE", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(v["prediction"].is_null());
    assert_eq!(v["histogram"].as_array().unwrap().len(), 7);
}

#[test]
fn regions_lists_all_codes() {
    let output = Command::cargo_bin("cadence")
        .unwrap()
        .arg("regions")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let codes: Vec<&str> = stdout.lines().skip(1).map(str::trim).collect();
    assert_eq!(codes.len(), 26);
    assert!(codes.contains(&"ZH"));
    assert!(codes.contains(&"AG"));
}

#[test]
fn unknown_region_is_rejected() {
    let dir = tempdir().unwrap();
    cadence(dir.path())
        .args(["report", "XX"])
        .assert()
        .failure();
}

#[test]
fn offline_without_checkout_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nowhere");
    cadence(&missing).args(["report", "ZH"]).assert().failure();
}
