#![allow(dead_code)]

use assert_cmd::Command;
use chrono::NaiveDate;
use expense_tracker::domain::{Category, Expense};
use tempfile::TempDir;

pub const BIN_NAME: &str = "expense_tracker_cli";

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 12).expect("valid date")
}

pub fn expense(amount: f64, category: Category) -> Expense {
    Expense::new(amount, category, "", day()).expect("positive amount")
}

/// Binary in script mode, with config isolated under `home`.
pub fn script_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("EXPENSE_TRACKER_CLI_SCRIPT", "1")
        .env("EXPENSE_TRACKER_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}
