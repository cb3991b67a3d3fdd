use crate::core::{advice, aggregation, Clock, SpendingSummary};
use crate::domain::{Expense, ExpenseDraft};
use crate::errors::TrackerError;

/// Append-only record of the expenses entered during a session.
///
/// The log is the only owner of the list; the aggregation and advice
/// functions borrow a snapshot through [`ExpenseLog::expenses`].
#[derive(Debug, Clone, Default)]
pub struct ExpenseLog {
    expenses: Vec<Expense>,
}

impl ExpenseLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamps the draft with a fresh id and today's date and appends it.
    ///
    /// A non-positive amount leaves the log untouched.
    pub fn record(
        &mut self,
        draft: ExpenseDraft,
        clock: &dyn Clock,
    ) -> Result<&Expense, TrackerError> {
        let description = draft.description.trim().to_string();
        let expense = match Expense::new(draft.amount, draft.category, description, clock.today())
        {
            Ok(expense) => expense,
            Err(err) => {
                tracing::warn!(amount = draft.amount, "discarding expense: {err}");
                return Err(err);
            }
        };
        tracing::info!(
            amount = expense.amount(),
            category = %expense.category(),
            "expense recorded"
        );
        self.expenses.push(expense);
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn iter(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.iter()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn summary(&self) -> SpendingSummary {
        aggregation::aggregate(&self.expenses)
    }

    pub fn advice(&self) -> String {
        advice::get_advice(&self.expenses)
    }
}
