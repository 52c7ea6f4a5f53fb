//! End-to-end tests for the `ledger` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ledger(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ledger").unwrap();
    cmd.env("MINI_LEDGER_DATA_DIR", data_dir.path())
        .env_remove("MINI_LEDGER_LOG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_init_creates_ledger_file() {
    let data_dir = TempDir::new().unwrap();

    ledger(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    let contents = std::fs::read(data_dir.path().join("data").join("ledger.csv")).unwrap();
    assert!(contents.starts_with(b"\xEF\xBB\xBFdate,type,category,amount,description"));
    assert!(data_dir.path().join("config.json").exists());

    ledger(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));
}

#[test]
fn test_add_then_list_by_date() {
    let data_dir = TempDir::new().unwrap();

    ledger(&data_dir)
        .args(["add", "expense", "food", "25000", "--date", "2024-01-15", "--description", "dinner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense food of ₩25,000.00 on 2024-01-15"));

    ledger(&data_dir)
        .args(["add", "income", "salary", "3000000", "--date", "2024-01-25", "-m", "월급"])
        .assert()
        .success();

    ledger(&data_dir)
        .args(["list", "--date", "2024-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dinner"))
        .stdout(predicate::str::contains("월급").not())
        .stdout(predicate::str::contains("1 transaction(s)"));

    ledger(&data_dir)
        .args(["list", "--from", "2024-01-01", "--to", "2024-01-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("월급"))
        .stdout(predicate::str::contains("₩2,975,000.00"))
        .stdout(predicate::str::contains("2 transaction(s)"));
}

#[test]
fn test_invalid_add_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    ledger(&data_dir)
        .args(["add", "income", "food", "100", "--date", "2024-01-15"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    ledger(&data_dir)
        .args(["add", "expense", "food", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    ledger(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn test_list_date_conflicts_with_range() {
    let data_dir = TempDir::new().unwrap();

    ledger(&data_dir)
        .args(["list", "--date", "2024-01-15", "--from", "2024-01-01"])
        .assert()
        .failure();
}

#[test]
fn test_stats_and_export() {
    let data_dir = TempDir::new().unwrap();
    let export = data_dir.path().join("january.csv");

    for (kind, category, amount, date) in [
        ("income", "salary", "3000000", "2024-01-25"),
        ("expense", "food", "25000", "2024-01-15"),
        ("expense", "transport", "55000", "2024-01-20"),
        ("expense", "food", "9000", "2024-02-01"),
    ] {
        ledger(&data_dir)
            .args(["add", kind, category, amount, "--date", date])
            .assert()
            .success();
    }

    ledger(&data_dir)
        .args(["stats", "--month", "2024-01", "--output"])
        .arg(&export)
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly Summary: 2024-01"))
        .stdout(predicate::str::contains("₩2,920,000.00"))
        .stdout(predicate::str::contains("Exported to"));

    let csv = std::fs::read_to_string(&export).unwrap();
    assert!(csv.contains("2024-01,expense,transport,55000.00,68.75"));
    assert!(csv.contains("2024-01,,BALANCE,2920000.00,"));
}

#[test]
fn test_stats_empty_month() {
    let data_dir = TempDir::new().unwrap();

    ledger(&data_dir)
        .args(["stats", "--month", "2024-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions this month."));

    ledger(&data_dir)
        .args(["stats", "--month", "2024-13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month"));
}

#[test]
fn test_categories() {
    let data_dir = TempDir::new().unwrap();

    ledger(&data_dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("income"))
        .stdout(predicate::str::contains("salary"))
        .stdout(predicate::str::contains("utilities"));
}

#[test]
fn test_quote_invalid_period() {
    let data_dir = TempDir::new().unwrap();

    ledger(&data_dir)
        .args(["quote", "AAPL", "--period", "2w"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid period"));
}

#[test]
fn test_quote_unreachable_endpoint() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(
        data_dir.path().join("config.json"),
        r#"{"quote": {"endpoint": "http://127.0.0.1:1", "timeout_secs": 2}}"#,
    )
    .unwrap();

    ledger(&data_dir)
        .args(["quote", "aapl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Network error"));
}

#[test]
fn test_invalid_date_format_is_config_error() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(data_dir.path().join("config.json"), r#"{"date_format": "%Q"}"#).unwrap();

    ledger(&data_dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_config_shows_paths() {
    let data_dir = TempDir::new().unwrap();

    ledger(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("ledger.csv"))
        .stdout(predicate::str::contains("query1.finance.yahoo.com"));
}
