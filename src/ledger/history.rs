//! Read-only view over the recorded transactions

use crate::models::Transaction;

use super::notice::Notice;

/// Borrowed, insertion-ordered view of a ledger's transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionHistory<'a> {
    entries: &'a [Transaction],
}

impl<'a> TransactionHistory<'a> {
    pub(crate) fn new(entries: &'a [Transaction]) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'a, Transaction> {
        self.entries.iter()
    }

    /// Lines to print for this view
    ///
    /// An empty history yields exactly the "no transactions" notice; otherwise a
    /// header followed by one description per entry, oldest first.
    pub fn lines(&self, symbol: &str) -> Vec<String> {
        if self.entries.is_empty() {
            return vec![Notice::NoTransactions.message(symbol)];
        }

        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        lines.push("Transaction History:".to_string());
        lines.extend(self.entries.iter().map(|txn| txn.description(symbol)));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_empty_history_is_single_notice() {
        let history = TransactionHistory::new(&[]);
        assert!(history.is_empty());
        assert_eq!(history.lines("Rs "), vec!["No transactions recorded yet."]);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let entries = vec![
            Transaction::income(Money::from_units(1000)),
            Transaction::expense(Money::from_units(200), "Food"),
        ];
        let history = TransactionHistory::new(&entries);

        assert_eq!(history.len(), 2);
        assert_eq!(
            history.lines("Rs "),
            vec![
                "Transaction History:",
                "Income: Rs 1000.00",
                "Expense (Food): Rs 200.00",
            ]
        );
    }
}
