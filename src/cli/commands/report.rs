use crate::cli::chart::render_bar_chart;
use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::currency::format_currency;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "summary",
            "Show totals and spending by category",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new(
            "advice",
            "Get financial advice for the recorded expenses",
            "advice",
            cmd_advice,
        ),
    ]
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = context.log.summary();
    let locale = &context.config.locale;
    let prefs = output::current_preferences();

    output::section("Spending by Category");
    output::two_column(&[
        ("Total Spent", format_currency(locale, summary.total_spent)),
        ("Transactions", summary.transaction_count.to_string()),
        ("Average", format_currency(locale, summary.average_amount)),
    ]);
    println!();
    for line in render_bar_chart(
        &summary,
        context.config.chart_width,
        locale,
        prefs.screen_reader_mode,
    ) {
        println!("  {line}");
    }
    Ok(())
}

fn cmd_advice(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let total = context.log.summary().total_spent;

    output::section("Financial Advisor");
    output::two_column(&[(
        "Total Spending",
        format_currency(&context.config.locale, total),
    )]);
    println!();
    println!("{}", context.log.advice());
    Ok(())
}
