//! Rolls an expense list up into totals per category.

use serde::Serialize;

use crate::domain::{Category, Expense};

/// Sum of expense amounts for one category.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
}

/// Aggregated figures over a snapshot of the expense list.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SpendingSummary {
    pub total_spent: f64,
    pub transaction_count: usize,
    pub average_amount: f64,
    /// One entry per category, in [`Category::ALL`] order.
    pub per_category: Vec<CategoryTotal>,
}

impl SpendingSummary {
    pub fn total_for(&self, category: Category) -> f64 {
        self.per_category
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.total)
            .unwrap_or(0.0)
    }

    /// The category with the largest strictly positive total.
    ///
    /// Ties resolve to the category that comes first in enumeration order.
    pub fn top_category(&self) -> Option<CategoryTotal> {
        self.per_category
            .iter()
            .filter(|entry| entry.total > 0.0)
            .fold(None, |best: Option<CategoryTotal>, entry| match best {
                Some(current) if current.total >= entry.total => Some(current),
                _ => Some(*entry),
            })
    }

    /// Upper bound for chart bars; never below 1 so an empty chart still has a scale.
    pub fn chart_max(&self) -> f64 {
        self.per_category
            .iter()
            .map(|entry| entry.total)
            .fold(1.0, f64::max)
    }

    pub fn is_empty(&self) -> bool {
        self.transaction_count == 0
    }
}

/// Computes totals, count, average and per-category sums in a single pass.
pub fn aggregate(expenses: &[Expense]) -> SpendingSummary {
    let mut sums = [0.0_f64; Category::ALL.len()];
    let mut total_spent = 0.0;
    for expense in expenses {
        sums[expense.category().index()] += expense.amount();
        total_spent += expense.amount();
    }

    let transaction_count = expenses.len();
    let average_amount = if transaction_count == 0 {
        0.0
    } else {
        total_spent / transaction_count as f64
    };

    let per_category = Category::ALL
        .iter()
        .map(|category| CategoryTotal {
            category: *category,
            total: sums[category.index()],
        })
        .collect();

    tracing::debug!(
        transaction_count,
        total_spent,
        average_amount,
        "aggregated expenses"
    );

    SpendingSummary {
        total_spent,
        transaction_count,
        average_amount,
        per_category,
    }
}
