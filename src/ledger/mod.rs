//! Session state owned by the presentation layer.

pub mod expense_log;
pub mod input;

pub use expense_log::ExpenseLog;
pub use input::parse_amount;
