use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::registry::CommandEntry;
use crate::cli::table::{Alignment, Table, TableColumn};
use crate::currency::format_currency;
use crate::domain::{Category, ExpenseDraft};
use crate::errors::TrackerError;
use crate::ledger::parse_amount;

const ADD_USAGE: &str = "add <amount> <category> [description...]";
const DESCRIPTION_WIDTH: usize = 32;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("add", "Record a new expense", ADD_USAGE, cmd_add),
        CommandEntry::new("list", "List recorded expenses", "list", cmd_list),
        CommandEntry::new(
            "categories",
            "Show the available categories",
            "categories",
            cmd_categories,
        ),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let draft = match args {
        [] if context.mode == CliMode::Interactive => prompt_draft(context)?,
        [] | [_] => return Err(CommandError::usage(ADD_USAGE)),
        [amount, category, description @ ..] => {
            let category: Category = category.parse()?;
            ExpenseDraft::new(parse_amount(amount), category, description.join(" "))
        }
    };

    match context.record_expense(draft) {
        Ok(expense) => {
            cli_io::print_success(format!(
                "Added {} for {} on {}.",
                format_currency(&context.config.locale, expense.amount()),
                expense.category(),
                expense.iso_date()
            ));
            Ok(())
        }
        Err(TrackerError::InvalidAmount(_)) => {
            cli_io::print_warning("Amount must be greater than zero; nothing was added.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn prompt_draft(context: &ShellContext) -> Result<ExpenseDraft, CommandError> {
    let raw_amount = cli_io::prompt_text(&context.theme, "Amount", "0.00", false)?;
    let labels: Vec<&str> = Category::ALL.iter().map(Category::label).collect();
    let selected = cli_io::prompt_select(
        &context.theme,
        "Category",
        &labels,
        context.config.default_category.index(),
    )?;
    let description = cli_io::prompt_text(&context.theme, "Description", "", true)?;
    Ok(ExpenseDraft::new(
        parse_amount(&raw_amount),
        Category::ALL[selected],
        description,
    ))
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.log.is_empty() {
        cli_io::print_info("No expenses recorded yet. Use `add` to record one.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        TableColumn::new("Date", Alignment::Left),
        TableColumn::new("Category", Alignment::Left),
        TableColumn::new("Amount", Alignment::Right),
        TableColumn::new("Description", Alignment::Left).max_width(DESCRIPTION_WIDTH),
        TableColumn::new("Id", Alignment::Left),
    ]);
    for expense in context.log.iter() {
        table.push_row(vec![
            expense.iso_date(),
            expense.category().to_string(),
            format_currency(&context.config.locale, expense.amount()),
            expense.description().to_string(),
            expense.short_id(),
        ]);
    }
    println!("{}", table.render());
    Ok(())
}

fn cmd_categories(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    for (position, category) in Category::ALL.iter().enumerate() {
        println!("  {}. {}", position + 1, category);
    }
    Ok(())
}
