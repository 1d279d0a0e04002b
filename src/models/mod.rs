//! Core data models for budget-tracker
//!
//! This module contains the value types the ledger is built from: monetary
//! amounts and recorded transactions.

pub mod money;
pub mod transaction;

pub use money::{Money, MoneyParseError};
pub use transaction::Transaction;
