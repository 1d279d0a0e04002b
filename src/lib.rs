//! budget-tracker - Terminal-based personal income and expense ledger
//!
//! This library provides the core functionality for the budget-tracker
//! application: an in-memory ledger that records income and expenses, keeps
//! a running balance, warns when spending passes a monthly goal and prints a
//! summary report.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money amounts and transaction records
//! - `ledger`: The ledger itself, its notices and history view
//! - `reports`: The monthly summary report
//! - `display`: Terminal formatting helpers
//! - `config`: Configuration and path management
//! - `cli`: Interactive session and menu loop
//! - `logging`: Diagnostic logging setup
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use budget_tracker::ledger::Ledger;
//! use budget_tracker::models::Money;
//!
//! let mut ledger = Ledger::new();
//! ledger.add_income(Money::from_units(1000)).unwrap();
//! ledger.add_expense(Money::from_units(200), "Food").unwrap();
//! assert_eq!(ledger.balance(), Money::from_units(800));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod reports;

pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
