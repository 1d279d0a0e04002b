//! Custom error types for budget-tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::fmt;

use thiserror::Error;

/// Which monetary input was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountField {
    Income,
    Expense,
    BudgetGoal,
}

impl fmt::Display for AmountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
            Self::BudgetGoal => write!(f, "Budget goal"),
        }
    }
}

/// The main error type for budget-tracker operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// A negative amount was passed to the ledger
    #[error("{field} cannot be negative.")]
    InvalidAmount { field: AmountField },

    /// Recording the amount would push a ledger total out of range
    #[error("{field} is too large; ledger totals would overflow.")]
    AmountOverflow { field: AmountField },

    /// The transaction history reached its configured capacity
    #[error("Transaction history is full ({capacity} entries); the entry was not recorded.")]
    HistoryFull { capacity: usize },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// User input that could not be understood
    #[error("Invalid input: {0}")]
    Validation(String),
}

impl LedgerError {
    /// Create an "invalid amount" error for the given field
    pub fn invalid_amount(field: AmountField) -> Self {
        Self::InvalidAmount { field }
    }

    /// Check if this is an invalid amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount { .. })
    }

    /// Check if this is an overflow error
    pub fn is_amount_overflow(&self) -> bool {
        matches!(self, Self::AmountOverflow { .. })
    }

    /// Check if this is a capacity error
    pub fn is_history_full(&self) -> bool {
        matches!(self, Self::HistoryFull { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget-tracker operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_amount_messages() {
        assert_eq!(
            LedgerError::invalid_amount(AmountField::Income).to_string(),
            "Income cannot be negative."
        );
        assert_eq!(
            LedgerError::invalid_amount(AmountField::Expense).to_string(),
            "Expense cannot be negative."
        );
        assert_eq!(
            LedgerError::invalid_amount(AmountField::BudgetGoal).to_string(),
            "Budget goal cannot be negative."
        );
    }

    #[test]
    fn test_predicates() {
        assert!(LedgerError::invalid_amount(AmountField::Income).is_invalid_amount());
        assert!(LedgerError::HistoryFull { capacity: 3 }.is_history_full());
        assert!(LedgerError::Validation("abc".into()).is_validation());
        assert!(!LedgerError::Config("x".into()).is_invalid_amount());
    }

    #[test]
    fn test_amount_overflow_display() {
        let err = LedgerError::AmountOverflow {
            field: AmountField::Income,
        };
        assert!(err.is_amount_overflow());
        assert!(!err.is_invalid_amount());
        assert_eq!(
            err.to_string(),
            "Income is too large; ledger totals would overflow."
        );
    }

    #[test]
    fn test_history_full_display() {
        let err = LedgerError::HistoryFull { capacity: 100 };
        assert_eq!(
            err.to_string(),
            "Transaction history is full (100 entries); the entry was not recorded."
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LedgerError = io_err.into();
        assert!(matches!(err, LedgerError::Io(_)));
    }
}
