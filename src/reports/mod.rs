//! Reports module for budget-tracker
//!
//! Provides the monthly summary report built from the ledger.

pub mod monthly;

pub use monthly::{CategorySpending, MonthlyReport};
