//! Interactive session state
//!
//! Owns the ledger for one run together with the effective settings.

use tracing::info;

use crate::config::Settings;
use crate::error::LedgerResult;
use crate::ledger::{Ledger, Notice};
use crate::models::Money;

/// One interactive run of the tracker
#[derive(Debug)]
pub struct Session {
    ledger: Ledger,
    settings: Settings,
}

impl Session {
    /// Create a session with an empty ledger sized by the settings
    pub fn new(settings: Settings) -> Self {
        info!(
            capacity = ?settings.history_capacity,
            currency = %settings.currency_symbol,
            "session started"
        );
        Self {
            ledger: Ledger::with_capacity_limit(settings.history_capacity),
            settings,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Currency symbol used for every rendered amount
    pub fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }

    pub fn add_income(&mut self, amount: Money) -> LedgerResult<()> {
        self.ledger.add_income(amount)
    }

    pub fn add_expense(&mut self, amount: Money, category: &str) -> LedgerResult<Option<Notice>> {
        self.ledger.add_expense(amount, category)
    }

    pub fn set_budget_goal(&mut self, goal: Money) -> LedgerResult<Notice> {
        self.ledger.set_budget_goal(goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changes_reach_the_ledger() {
        let mut session = Session::new(Settings::default());

        session.add_income(Money::from_units(1000)).unwrap();
        session.add_expense(Money::from_units(200), "Food").unwrap();
        let notice = session.set_budget_goal(Money::from_units(500)).unwrap();

        assert_eq!(notice, Notice::BudgetGoalSet { goal: Money::from_units(500) });
        assert_eq!(session.ledger().balance(), Money::from_units(800));
        assert_eq!(session.ledger().transactions().len(), 2);
        assert_eq!(session.symbol(), "Rs ");
    }

    #[test]
    fn test_rejected_changes_leave_ledger_empty() {
        let mut session = Session::new(Settings::default());

        assert!(session.add_income(Money::from_units(-1)).is_err());
        assert!(session.add_expense(Money::from_units(-1), "Food").is_err());

        assert!(session.ledger().transactions().is_empty());
        assert_eq!(session.ledger().balance(), Money::zero());
    }

    #[test]
    fn test_capacity_comes_from_settings() {
        let settings = Settings::default().with_overrides(None, Some(1));
        let mut session = Session::new(settings);

        session.add_income(Money::from_units(1)).unwrap();
        let err = session.add_income(Money::from_units(1)).unwrap_err();
        assert!(err.is_history_full());
        assert_eq!(session.settings().history_capacity, Some(1));
    }

    #[test]
    fn test_overflow_is_reported_not_recorded() {
        let mut session = Session::new(Settings::default());
        session.add_income(Money::MAX).unwrap();

        let err = session.add_income(Money::from_cents(1)).unwrap_err();
        assert!(err.is_amount_overflow());
        assert_eq!(session.ledger().balance(), Money::MAX);
    }
}
