//! Transaction model
//!
//! A ledger entry is either an income or a categorized expense. Amounts are
//! stored natively; the textual form only exists for display.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// A single recorded ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Transaction {
    /// Money coming in
    Income { amount: Money },
    /// Money going out, tagged with a free-form category label
    Expense { amount: Money, category: String },
}

impl Transaction {
    /// Create an income entry
    pub fn income(amount: Money) -> Self {
        Self::Income { amount }
    }

    /// Create an expense entry
    pub fn expense(amount: Money, category: impl Into<String>) -> Self {
        Self::Expense {
            amount,
            category: category.into(),
        }
    }

    /// The recorded amount (always non-negative)
    pub fn amount(&self) -> Money {
        match self {
            Self::Income { amount } | Self::Expense { amount, .. } => *amount,
        }
    }

    /// The category label, for expenses
    pub fn category(&self) -> Option<&str> {
        match self {
            Self::Income { .. } => None,
            Self::Expense { category, .. } => Some(category),
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income { .. })
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense { .. })
    }

    /// The effect this entry has on the running balance
    pub fn signed_amount(&self) -> Money {
        match self {
            Self::Income { amount } => *amount,
            Self::Expense { amount, .. } => -*amount,
        }
    }

    /// One-line description, e.g. `Expense (Food): Rs 200.00`
    pub fn description(&self, symbol: &str) -> String {
        match self {
            Self::Income { amount } => format!("Income: {}", amount.format_with_symbol(symbol)),
            Self::Expense { amount, category } => format!(
                "Expense ({}): {}",
                category,
                amount.format_with_symbol(symbol)
            ),
        }
    }
}
