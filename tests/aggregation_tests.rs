mod common;

use common::expense;
use expense_tracker::{aggregate, domain::Category};

#[test]
fn empty_list_has_every_category_at_zero() {
    let summary = aggregate(&[]);
    assert_eq!(summary.total_spent, 0.0);
    assert_eq!(summary.transaction_count, 0);
    assert_eq!(summary.average_amount, 0.0);
    assert_eq!(summary.per_category.len(), Category::ALL.len());
    for (entry, category) in summary.per_category.iter().zip(Category::ALL) {
        assert_eq!(entry.category, category);
        assert_eq!(entry.total, 0.0);
    }
}

#[test]
fn total_matches_sum_of_category_totals() {
    let lists = vec![
        vec![expense(30.0, Category::Food)],
        vec![
            expense(10.0, Category::Food),
            expense(60.0, Category::Entertainment),
        ],
        vec![
            expense(2.25, Category::Transportation),
            expense(7.5, Category::Food),
            expense(0.75, Category::Transportation),
            expense(100.0, Category::Entertainment),
        ],
    ];
    for expenses in lists {
        let summary = aggregate(&expenses);
        let category_sum: f64 = summary.per_category.iter().map(|e| e.total).sum();
        assert_eq!(summary.total_spent, category_sum);
        assert_eq!(summary.transaction_count, expenses.len());
    }
}

#[test]
fn single_food_expense_summary() {
    let summary = aggregate(&[expense(30.0, Category::Food)]);
    assert_eq!(summary.total_spent, 30.0);
    assert_eq!(summary.transaction_count, 1);
    assert_eq!(summary.average_amount, 30.0);
    assert_eq!(summary.total_for(Category::Food), 30.0);
}

#[test]
fn two_category_summary() {
    let expenses = vec![
        expense(10.0, Category::Food),
        expense(60.0, Category::Entertainment),
    ];
    let summary = aggregate(&expenses);
    assert_eq!(summary.total_spent, 70.0);
    assert_eq!(summary.average_amount, 35.0);
    let top = summary.top_category().expect("positive spend");
    assert_eq!(top.category, Category::Entertainment);
    assert_eq!(top.total, 60.0);
}

#[test]
fn aggregate_is_idempotent() {
    let expenses = vec![
        expense(4.0, Category::Entertainment),
        expense(9.0, Category::Transportation),
    ];
    assert_eq!(aggregate(&expenses), aggregate(&expenses));
}
