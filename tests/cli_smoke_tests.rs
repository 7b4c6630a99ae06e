//! CLI smoke tests
//!
//! Each test runs the binary against its own temporary data directory via
//! the MONEY_BUDDY_DATA_DIR override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn money_buddy(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("money-buddy").unwrap();
    cmd.env("MONEY_BUDDY_DATA_DIR", temp_dir.path());
    cmd
}

#[test]
fn dashboard_shows_seeded_totals() {
    let temp_dir = TempDir::new().unwrap();

    money_buddy(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Income:  ₹5000.00"))
        .stdout(predicate::str::contains("Expense: ₹2080.00"))
        .stdout(predicate::str::contains("Balance: ₹2920.00"));
}

#[test]
fn add_and_history_round_trip() {
    let temp_dir = TempDir::new().unwrap();

    money_buddy(&temp_dir)
        .args(["add", "75.50", "Food", "--description", "Pizza night"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense ₹75.50 (Food)"));

    money_buddy(&temp_dir)
        .args(["history", "--search", "pizza"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pizza night"));
}

#[test]
fn add_rejects_invalid_amount() {
    let temp_dir = TempDir::new().unwrap();

    money_buddy(&temp_dir)
        .args(["add", "0", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid amount"));
}

#[test]
fn add_rejects_unknown_category() {
    let temp_dir = TempDir::new().unwrap();

    money_buddy(&temp_dir)
        .args(["add", "10", "Yachts"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown expense category"));
}

#[test]
fn category_delete_blocked_while_in_use() {
    let temp_dir = TempDir::new().unwrap();

    money_buddy(&temp_dir)
        .args(["category", "delete", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("in use"));

    money_buddy(&temp_dir)
        .args(["category", "delete", "Healthcare"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense category"));
}

#[test]
fn budget_status_reports_seeded_spending() {
    let temp_dir = TempDir::new().unwrap();

    money_buddy(&temp_dir)
        .args(["budget", "status", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"));
}

#[test]
fn export_writes_document() {
    let temp_dir = TempDir::new().unwrap();
    let export_path = temp_dir.path().join("dump.json");

    money_buddy(&temp_dir)
        .args(["export", export_path.to_str().unwrap()])
        .assert()
        .success();

    let raw = std::fs::read_to_string(&export_path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["transactions"].as_array().unwrap().len(), 5);
    assert!(json["exportDate"].is_string());
}

#[test]
fn reset_requires_confirmation_flag() {
    let temp_dir = TempDir::new().unwrap();

    money_buddy(&temp_dir).args(["reset"]).assert().failure();

    money_buddy(&temp_dir)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("defaults restored"));
}
