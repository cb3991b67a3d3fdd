//! Text rendering of the per-category spending chart.

use crate::core::SpendingSummary;
use crate::currency::{format_currency, percentage, LocaleConfig};

/// Horizontal bar scaled against `max`, e.g. `████████░░░░`.
pub fn ascii_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    let ratio = (value / max).clamp(0.0, 1.0);
    let filled = ((ratio * width as f64).round() as usize).min(width);
    let empty = width - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// One line per category, in enumeration order.
///
/// Bars are scaled to [`SpendingSummary::chart_max`]. With `accessible` set the
/// bars are replaced by each category's share of total spending.
pub fn render_bar_chart(
    summary: &SpendingSummary,
    width: usize,
    locale: &LocaleConfig,
    accessible: bool,
) -> Vec<String> {
    let label_width = summary
        .per_category
        .iter()
        .map(|entry| entry.category.label().len())
        .max()
        .unwrap_or(0);
    let max = summary.chart_max();

    summary
        .per_category
        .iter()
        .map(|entry| {
            let amount = format_currency(locale, entry.total);
            if accessible {
                format!(
                    "{}: {} ({}% of spending)",
                    entry.category,
                    amount,
                    percentage(entry.total, summary.total_spent)
                )
            } else {
                format!(
                    "{:<label_width$}  {}  {}",
                    entry.category.label(),
                    ascii_bar(entry.total, max, width),
                    amount,
                    label_width = label_width
                )
            }
        })
        .collect()
}
