mod common;

use common::day;
use expense_tracker::{
    core::{Clock, FixedClock},
    domain::{Category, ExpenseDraft},
    errors::TrackerError,
    ledger::{parse_amount, ExpenseLog},
};

#[test]
fn records_receive_unique_ids_and_clock_date() {
    let clock = FixedClock::new(day());
    let mut log = ExpenseLog::new();
    let first = log
        .record(ExpenseDraft::new(5.0, Category::Food, "bagel"), &clock)
        .unwrap()
        .id();
    let second = log
        .record(ExpenseDraft::new(5.0, Category::Food, "bagel"), &clock)
        .unwrap()
        .id();

    assert_ne!(first, second);
    assert_eq!(log.expenses()[0].date(), clock.today());
    assert_eq!(log.expenses()[1].iso_date(), "2025-04-12");
}

#[test]
fn rejected_amounts_are_not_appended() {
    let clock = FixedClock::new(day());
    let mut log = ExpenseLog::new();
    log.record(ExpenseDraft::new(3.0, Category::Transportation, ""), &clock)
        .unwrap();

    for raw in ["0.00", "-12", "$-5", "free", ""] {
        let err = log
            .record(
                ExpenseDraft::new(parse_amount(raw), Category::Food, "ignored"),
                &clock,
            )
            .expect_err("non-positive input is rejected");
        assert!(matches!(err, TrackerError::InvalidAmount(_)));
    }

    assert_eq!(log.len(), 1);
    assert_eq!(log.summary().total_spent, 3.0);
}

#[test]
fn log_preserves_insertion_order() {
    let clock = FixedClock::new(day());
    let mut log = ExpenseLog::new();
    for (amount, category) in [
        (1.0, Category::Transportation),
        (2.0, Category::Food),
        (3.0, Category::Entertainment),
    ] {
        log.record(ExpenseDraft::new(amount, category, ""), &clock)
            .unwrap();
    }
    let amounts: Vec<f64> = log.iter().map(|e| e.amount()).collect();
    assert_eq!(amounts, vec![1.0, 2.0, 3.0]);
}

#[test]
fn formatted_input_is_accepted() {
    let clock = FixedClock::new(day());
    let mut log = ExpenseLog::new();
    let expense = log
        .record(
            ExpenseDraft::new(parse_amount("$1,024.10"), Category::Entertainment, " concert "),
            &clock,
        )
        .unwrap();
    assert_eq!(expense.amount(), 1024.1);
    assert_eq!(expense.description(), "concert");
}
