//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against a throwaway HOME so
//! they never touch real user data.

use std::path::Path;
use std::process::Command;

/// Run a CLI command with an isolated data directory.
///
/// HOME is redirected to a throwaway directory; CARGO_HOME is pinned to
/// the real one so cargo still finds its registry.
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let cargo_home = std::env::var("CARGO_HOME").unwrap_or_else(|_| {
        format!("{}/.cargo", std::env::var("HOME").unwrap_or_default())
    });
    let output = Command::new("cargo")
        .args(["run", "-p", "eusunt-cli", "--"])
        .args(args)
        .env("HOME", home)
        .env("CARGO_HOME", cargo_home)
        .env("EUSUNT_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_ok(home: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "CLI command failed: {args:?}\nstderr: {stderr}");
    stdout
}

fn run_err(home: &Path, args: &[&str]) -> String {
    let (_, stderr, code) = run_cli(home, args);
    assert_ne!(code, 0, "CLI command unexpectedly succeeded: {args:?}");
    stderr
}

#[test]
fn test_plan_list() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_ok(home.path(), &["plan", "list"]);
    assert!(stdout.contains("Eu sunt..."));
    assert!(stdout.contains("Mama"));

    let stdout = run_ok(home.path(), &["plan", "list", "--json"]);
    let plans: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(plans.as_array().unwrap().len(), 7);
}

#[test]
fn test_badges_start_locked() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_ok(home.path(), &["badges", "list", "--json"]);
    let gallery: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(gallery.as_array().unwrap().len(), 13);
    assert!(gallery
        .as_array()
        .unwrap()
        .iter()
        .all(|b| b["collected"] == false));
}

#[test]
fn test_checkin_once_per_day() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_ok(
        home.path(),
        &["checkin", "record", "fericit", "am citit o carte"],
    );
    assert!(stdout.contains("CheckinRecorded"));
    assert!(stdout.contains("\"streak\": 1"));

    let stderr = run_err(home.path(), &["checkin", "record", "trist", "din nou"]);
    assert!(stderr.contains("Already checked in"));

    let stdout = run_ok(home.path(), &["checkin", "status", "--json"]);
    let streak: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(streak["currentStreak"], 1);
}

#[test]
fn test_journal_full_flow() {
    let home = tempfile::tempdir().unwrap();
    run_ok(home.path(), &["journal", "start", "1"]);

    // Advancing early is rejected and loses nothing.
    run_ok(home.path(), &["journal", "add", "curajos"]);
    let stderr = run_err(home.path(), &["journal", "continue"]);
    assert!(stderr.contains("cel puțin"));

    for i in 1..7 {
        run_ok(home.path(), &["journal", "add", &format!("gând {i}")]);
    }
    run_ok(home.path(), &["journal", "continue"]);

    // 7 justifications (one with an overridden connector), then 2x7
    // reflections; the last answer submits.
    run_ok(
        home.path(),
        &[
            "journal",
            "next",
            "am vorbit în fața clasei",
            "--connector",
            "din cauza",
        ],
    );
    for _ in 1..7 {
        run_ok(home.path(), &["journal", "next", "pentru că exersez"]);
    }
    for _ in 0..7 {
        run_ok(home.path(), &["journal", "next", "doar uneori"]);
    }
    for _ in 0..6 {
        run_ok(home.path(), &["journal", "next", "puțin trist"]);
    }
    let stdout = run_ok(home.path(), &["journal", "next", "puțin trist"]);
    assert!(stdout.contains("EntryCompleted"));

    // The session is gone and the entry landed with its badge.
    let stderr = run_err(home.path(), &["journal", "status"]);
    assert!(stderr.contains("no journal session"));

    let stdout = run_ok(home.path(), &["entries", "list", "--json"]);
    let entries: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entry = &entries.as_array().unwrap()[0];
    assert_eq!(entry["thoughtPairs"].as_array().unwrap().len(), 7);
    assert_eq!(entry["thoughtPairs"][0]["connector"], "din cauza");
    assert_eq!(entry["thoughtPairs"][1]["connector"], "datorită");
    assert_eq!(entry["badgeName"], "Identitate");

    let stdout = run_ok(home.path(), &["badges", "list"]);
    assert!(stdout.contains("Insigne colectate: 1/13"));
}

#[test]
fn test_journal_back_repopulates_previous_answer() {
    let home = tempfile::tempdir().unwrap();
    run_ok(home.path(), &["journal", "start", "3"]);
    for i in 0..7 {
        run_ok(home.path(), &["journal", "add", &format!("gând {i}")]);
    }
    run_ok(home.path(), &["journal", "continue"]);
    run_ok(home.path(), &["journal", "next", "primul răspuns"]);

    let stdout = run_ok(home.path(), &["journal", "back"]);
    assert!(stdout.contains("SteppedBack"));
    assert!(stdout.contains("Răspunsul anterior: primul răspuns"));
}

#[test]
fn test_journal_rejects_blank_answers() {
    let home = tempfile::tempdir().unwrap();
    run_ok(home.path(), &["journal", "start", "3"]);
    let stderr = run_err(home.path(), &["journal", "add", "   "]);
    assert!(stderr.contains("Te rog completează"));
    run_ok(home.path(), &["journal", "cancel"]);
}

#[test]
fn test_export_pdf() {
    let home = tempfile::tempdir().unwrap();
    run_ok(home.path(), &["journal", "start", "3"]);
    for i in 0..7 {
        run_ok(home.path(), &["journal", "add", &format!("gând {i}")]);
    }
    run_ok(home.path(), &["journal", "continue"]);
    for _ in 0..21 {
        run_ok(home.path(), &["journal", "next", "x"]);
    }

    let out = home.path().join("jurnal.pdf");
    let out_str = out.to_string_lossy().to_string();
    run_ok(home.path(), &["export", "pdf", "--out", &out_str]);
    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_data_reset_requires_confirmation() {
    let home = tempfile::tempdir().unwrap();
    run_ok(
        home.path(),
        &["checkin", "record", "liniștit", "o zi bună"],
    );

    let stderr = run_err(home.path(), &["data", "reset", "--all"]);
    assert!(stderr.contains("--yes"));

    let stdout = run_ok(home.path(), &["data", "reset", "--all", "--yes"]);
    assert!(stdout.contains("1 moods"));

    let stdout = run_ok(home.path(), &["checkin", "status", "--json"]);
    let streak: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(streak["currentStreak"], 0);
}

#[test]
fn test_profile_render_writes_svg() {
    let home = tempfile::tempdir().unwrap();
    let out = home.path().join("avatar.svg");
    let out_str = out.to_string_lossy().to_string();
    run_ok(home.path(), &["profile", "render", "--out", &out_str]);
    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.starts_with("<svg "));
    assert!(!svg.contains("FILL_COLOR"));

    // Locked items stay locked until their badge is earned.
    let stderr = run_err(home.path(), &["profile", "set-part", "accessory-crown"]);
    assert!(stderr.contains("Curaj"));
}
