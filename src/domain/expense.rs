//! The expense value record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::Category;
use crate::errors::TrackerError;

/// A single spending event. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawExpense")]
pub struct Expense {
    id: Uuid,
    amount: f64,
    category: Category,
    description: String,
    date: NaiveDate,
}

impl Expense {
    /// Builds an expense with a fresh identifier.
    ///
    /// Fails with [`TrackerError::InvalidAmount`] unless `amount` is finite and
    /// strictly positive.
    pub fn new(
        amount: f64,
        category: Category,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, TrackerError> {
        Self::with_id(Uuid::new_v4(), amount, category, description, date)
    }

    fn with_id(
        id: Uuid,
        amount: f64,
        category: Category,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, TrackerError> {
        validate_amount(amount)?;
        Ok(Self {
            id,
            amount,
            category,
            description: description.into(),
            date,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Creation day as `YYYY-MM-DD`.
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// First eight hex digits of the identifier, for compact listings.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}

fn validate_amount(amount: f64) -> Result<(), TrackerError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(TrackerError::InvalidAmount(amount))
    }
}

#[derive(Deserialize)]
struct RawExpense {
    id: Uuid,
    amount: f64,
    category: Category,
    #[serde(default)]
    description: String,
    date: NaiveDate,
}

impl TryFrom<RawExpense> for Expense {
    type Error = TrackerError;

    fn try_from(raw: RawExpense) -> Result<Self, Self::Error> {
        Expense::with_id(raw.id, raw.amount, raw.category, raw.description, raw.date)
    }
}

/// User input for a new expense, before an id and date are assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub amount: f64,
    pub category: Category,
    pub description: String,
}

impl ExpenseDraft {
    pub fn new(amount: f64, category: Category, description: impl Into<String>) -> Self {
        Self {
            amount,
            category,
            description: description.into(),
        }
    }
}
