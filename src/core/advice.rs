//! Canned spending tips chosen by fixed threshold rules.

use std::fmt;

use crate::core::aggregation::{aggregate, SpendingSummary};
use crate::currency::{format_dollars, percentage};
use crate::domain::{Category, Expense};

/// Returned verbatim when there is nothing to analyse.
pub const EMPTY_ADVICE: &str = "Add some expenses to get personalized financial advice.";

/// Average transaction value above which the savings tip is given.
pub const AVERAGE_TIP_THRESHOLD: f64 = 20.0;

/// Total spend above which the saving-rate tip is given.
pub const TOTAL_TIP_THRESHOLD: f64 = 50.0;

/// One advisory sentence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tip {
    TopCategory { category: Category, percent: i64 },
    HighAverage { average: f64 },
    HighTotal { total: f64 },
    Balanced,
}

impl fmt::Display for Tip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tip::TopCategory { category, percent } => write!(
                f,
                "You spend {percent}% on {category}. Consider setting a budget for this category."
            ),
            Tip::HighAverage { average } => write!(
                f,
                "Your average transaction is {}. Look for smaller, recurring savings.",
                format_dollars(*average)
            ),
            Tip::HighTotal { total } => write!(
                f,
                "Total spending is {}. Try saving 20% of income when possible.",
                format_dollars(*total)
            ),
            Tip::Balanced => f.write_str(
                "Your spending looks balanced. Keep tracking to spot trends over time.",
            ),
        }
    }
}

/// Applies the tip rules, in order, to an already aggregated summary.
///
/// Never returns an empty list: [`Tip::Balanced`] is produced when no other
/// rule fires.
pub fn advise(summary: &SpendingSummary) -> Vec<Tip> {
    let mut tips = Vec::new();

    if let Some(top) = summary.top_category() {
        tips.push(Tip::TopCategory {
            category: top.category,
            percent: percentage(top.total, summary.total_spent),
        });
    }
    if summary.average_amount > AVERAGE_TIP_THRESHOLD {
        tips.push(Tip::HighAverage {
            average: summary.average_amount,
        });
    }
    if summary.total_spent > TOTAL_TIP_THRESHOLD {
        tips.push(Tip::HighTotal {
            total: summary.total_spent,
        });
    }
    if tips.is_empty() {
        tips.push(Tip::Balanced);
    }

    tips
}

/// Builds the advice text for a snapshot of the expense list.
pub fn get_advice(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return EMPTY_ADVICE.to_string();
    }

    let tips = advise(&aggregate(expenses));
    tracing::debug!(tip_count = tips.len(), "generated advice");

    tips.iter()
        .map(Tip::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregation::CategoryTotal;

    fn summary(totals: [f64; 3], count: usize) -> SpendingSummary {
        let total_spent: f64 = totals.iter().sum();
        SpendingSummary {
            total_spent,
            transaction_count: count,
            average_amount: if count == 0 {
                0.0
            } else {
                total_spent / count as f64
            },
            per_category: Category::ALL
                .iter()
                .zip(totals)
                .map(|(category, total)| CategoryTotal {
                    category: *category,
                    total,
                })
                .collect(),
        }
    }

    #[test]
    fn falls_back_to_balanced_when_nothing_fires() {
        let tips = advise(&summary([0.0, 0.0, 0.0], 2));
        assert_eq!(tips, vec![Tip::Balanced]);
    }

    #[test]
    fn thresholds_are_strict() {
        let tips = advise(&summary([20.0, 0.0, 0.0], 1));
        assert_eq!(tips.len(), 1);

        let tips = advise(&summary([25.0, 25.0, 0.0], 3));
        assert!(tips.iter().all(|tip| !matches!(tip, Tip::HighTotal { .. })));
    }

    #[test]
    fn rules_fire_in_fixed_order() {
        let tips = advise(&summary([10.0, 60.0, 0.0], 2));
        assert_eq!(
            tips,
            vec![
                Tip::TopCategory {
                    category: Category::Entertainment,
                    percent: 86,
                },
                Tip::HighAverage { average: 35.0 },
                Tip::HighTotal { total: 70.0 },
            ]
        );
    }

    #[test]
    fn tips_render_exact_sentences() {
        assert_eq!(
            Tip::HighAverage { average: 30.0 }.to_string(),
            "Your average transaction is $30.00. Look for smaller, recurring savings."
        );
        assert_eq!(
            Tip::TopCategory {
                category: Category::Food,
                percent: 100,
            }
            .to_string(),
            "You spend 100% on Food. Consider setting a budget for this category."
        );
    }

    #[test]
    fn empty_list_short_circuits() {
        assert_eq!(get_advice(&[]), EMPTY_ADVICE);
    }
}
