#![doc(test(attr(deny(warnings))))]

//! Expense Tracker records personal expenses for a session, rolls them up by
//! category, and turns the totals into short rule-based spending advice.
//!
//! The computational core is two pure functions, [`core::aggregate`] and
//! [`core::get_advice`], which read a borrowed snapshot of the expense list.
//! The list itself lives in [`ledger::ExpenseLog`], owned by the caller.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod utils;

pub use crate::core::{aggregate, get_advice};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Tracker tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
