//! The in-memory ledger
//!
//! Holds the running balance, the monthly budget goal and the append-only
//! transaction log for one session. All mutations validate their input first
//! and leave the ledger untouched when they fail.
//!
//! The balance, total expenses and total income (balance + expenses) always
//! fit in [`Money`]; an entry that would break this is refused with
//! [`LedgerError::AmountOverflow`].

mod history;
mod notice;

pub use history::TransactionHistory;
pub use notice::Notice;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{AmountField, LedgerError, LedgerResult};
use crate::models::{Money, Transaction};
use crate::reports::MonthlyReport;

/// Reject negative amounts for the given field
pub fn ensure_non_negative(amount: Money, field: AmountField) -> LedgerResult<()> {
    if amount.is_negative() {
        return Err(LedgerError::invalid_amount(field));
    }
    Ok(())
}

/// Personal income/expense ledger
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    balance: Money,
    budget_goal: Money,
    transactions: Vec<Transaction>,
    /// Maximum number of recorded transactions (None = unbounded)
    capacity: Option<usize>,
}

impl Ledger {
    /// Create an empty, unbounded ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty ledger that refuses entries past `capacity`
    pub fn with_history_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::default()
        }
    }

    /// Create an empty ledger with an optional capacity
    pub fn with_capacity_limit(capacity: Option<usize>) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Record income and raise the balance
    pub fn add_income(&mut self, amount: Money) -> LedgerResult<()> {
        ensure_non_negative(amount, AmountField::Income)?;
        let overflow = || LedgerError::AmountOverflow {
            field: AmountField::Income,
        };
        self.balance.checked_add(amount).ok_or_else(overflow)?;
        self.total_income().checked_add(amount).ok_or_else(overflow)?;
        self.ensure_room()?;

        self.record(Transaction::income(amount));
        debug!(amount = %amount, balance = %self.balance, "income recorded");

        Ok(())
    }

    /// Record an expense, lower the balance and check the budget goal
    ///
    /// Returns the budget warning when cumulative expenses are above the goal.
    pub fn add_expense(
        &mut self,
        amount: Money,
        category: impl Into<String>,
    ) -> LedgerResult<Option<Notice>> {
        ensure_non_negative(amount, AmountField::Expense)?;
        let overflow = || LedgerError::AmountOverflow {
            field: AmountField::Expense,
        };
        self.balance.checked_sub(amount).ok_or_else(overflow)?;
        self.total_expenses().checked_add(amount).ok_or_else(overflow)?;
        self.ensure_room()?;

        let category = category.into();
        debug!(amount = %amount, category = %category, "expense recorded");
        self.record(Transaction::expense(amount, category));

        Ok(self.check_warning())
    }

    /// Overwrite the monthly budget goal
    pub fn set_budget_goal(&mut self, goal: Money) -> LedgerResult<Notice> {
        ensure_non_negative(goal, AmountField::BudgetGoal)?;

        self.budget_goal = goal;
        debug!(goal = %goal, "budget goal set");

        Ok(Notice::BudgetGoalSet { goal })
    }

    /// Current running balance
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Current monthly budget goal
    pub fn budget_goal(&self) -> Money {
        self.budget_goal
    }

    /// Configured history capacity, if any
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Sum of all expense amounts, recomputed from the log
    pub fn total_expenses(&self) -> Money {
        self.transactions
            .iter()
            .filter(|txn| txn.is_expense())
            .map(Transaction::amount)
            .sum()
    }

    /// Recorded transactions, oldest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// View of the transaction log for display
    pub fn view_transaction_history(&self) -> TransactionHistory<'_> {
        TransactionHistory::new(&self.transactions)
    }

    /// Summary report for the current month
    pub fn generate_monthly_report(&self) -> MonthlyReport {
        self.generate_report_for(chrono::Local::now().date_naive())
    }

    /// Summary report labelled with the month containing `date`
    pub fn generate_report_for(&self, date: NaiveDate) -> MonthlyReport {
        MonthlyReport::generate(self, date)
    }

    fn total_income(&self) -> Money {
        self.balance + self.total_expenses()
    }

    /// Append an entry already checked against the totals
    fn record(&mut self, txn: Transaction) {
        self.balance += txn.signed_amount();
        self.transactions.push(txn);
    }

    fn check_warning(&self) -> Option<Notice> {
        let total_expenses = self.total_expenses();
        if total_expenses > self.budget_goal {
            info!(total = %total_expenses, goal = %self.budget_goal, "budget goal exceeded");
            Some(Notice::BudgetExceeded {
                total_expenses,
                goal: self.budget_goal,
            })
        } else {
            None
        }
    }

    fn ensure_room(&self) -> LedgerResult<()> {
        match self.capacity {
            Some(capacity) if self.transactions.len() >= capacity => {
                Err(LedgerError::HistoryFull { capacity })
            }
            _ => Ok(()),
        }
    }
}
