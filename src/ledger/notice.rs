//! Informational notices produced by ledger operations
//!
//! Notices are not errors: the operation that produced one has succeeded.
//! The caller decides how to show them.

use crate::models::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The monthly goal was overwritten
    BudgetGoalSet { goal: Money },
    /// Cumulative expenses are above the goal after the latest expense
    BudgetExceeded { total_expenses: Money, goal: Money },
    /// The history view has nothing to show
    NoTransactions,
}

impl Notice {
    /// Render the notice for the terminal using the given currency symbol
    pub fn message(&self, symbol: &str) -> String {
        match self {
            Self::BudgetGoalSet { goal } => {
                format!("Monthly Budget Goal set to: {}", goal.format_with_symbol(symbol))
            }
            Self::BudgetExceeded { .. } => "Warning: You have exceeded your budget goal!".into(),
            Self::NoTransactions => "No transactions recorded yet.".into(),
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Self::BudgetExceeded { .. })
    }
}
