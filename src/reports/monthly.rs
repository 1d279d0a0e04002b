//! Monthly Report
//!
//! Summarizes the ledger: income, expenses, balance, standing against the
//! budget goal and spending per category.

use chrono::{Datelike, NaiveDate};

use crate::display::report::{format_percentage, left_align, right_align, truncate};
use crate::ledger::Ledger;
use crate::models::Money;

/// Widest category label shown in the breakdown
const MAX_CATEGORY_WIDTH: usize = 24;

/// Spending for a single category label
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    /// Category label as entered
    pub category: String,
    /// Total spent in this category
    pub total: Money,
    /// Number of expense entries
    pub transaction_count: usize,
    /// Share of all expenses
    pub percentage: f64,
}

/// Monthly summary report
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    /// First day of the month this report is labelled with
    pub month: NaiveDate,
    /// Income reconstructed as balance + total expenses
    pub total_income: Money,
    /// Sum of all expenses
    pub total_expenses: Money,
    /// Current running balance
    pub balance: Money,
    /// Monthly budget goal
    pub budget_goal: Money,
    /// Spending per category, in order of first appearance
    pub categories: Vec<CategorySpending>,
}

impl MonthlyReport {
    /// Generate the report for the month containing `date`
    pub fn generate(ledger: &Ledger, date: NaiveDate) -> Self {
        let total_expenses = ledger.total_expenses();
        let balance = ledger.balance();

        let mut categories: Vec<CategorySpending> = Vec::new();
        for txn in ledger.transactions() {
            let Some(label) = txn.category() else {
                continue;
            };
            match categories.iter_mut().find(|c| c.category == label) {
                Some(existing) => {
                    existing.total += txn.amount();
                    existing.transaction_count += 1;
                }
                None => categories.push(CategorySpending {
                    category: label.to_string(),
                    total: txn.amount(),
                    transaction_count: 1,
                    percentage: 0.0,
                }),
            }
        }

        for category in &mut categories {
            category.percentage = if total_expenses.is_zero() {
                0.0
            } else {
                (category.total.cents() as f64 / total_expenses.cents() as f64) * 100.0
            };
        }

        Self {
            month: date.with_day(1).unwrap_or(date),
            total_income: balance + total_expenses,
            total_expenses,
            balance,
            budget_goal: ledger.budget_goal(),
            categories,
        }
    }

    /// Expenses minus goal; positive when the goal is exceeded
    pub fn goal_difference(&self) -> Money {
        self.total_expenses - self.budget_goal
    }

    pub fn is_over_goal(&self) -> bool {
        self.goal_difference().is_positive()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let money = |m: Money| m.format_with_symbol(symbol);
        let mut output = String::new();

        let header = format!("------ Monthly Report ({}) ------", self.month.format("%B %Y"));
        output.push_str(&header);
        output.push('\n');
        output.push_str(&format!("Total Income: {}\n", money(self.total_income)));
        output.push_str(&format!("Total Expenses: {}\n", money(self.total_expenses)));
        output.push_str(&format!("Current Balance: {}\n", money(self.balance)));
        output.push_str(&format!("Budget Goal: {}\n", money(self.budget_goal)));

        let difference = self.goal_difference();
        if difference.is_positive() {
            output.push_str(&format!("Over Goal By: {}\n", money(difference)));
        } else {
            output.push_str(&format!("Remaining Under Goal: {}\n", money(difference.abs())));
        }

        if !self.categories.is_empty() {
            let name_width = self
                .categories
                .iter()
                .map(|c| c.category.chars().count())
                .max()
                .unwrap_or(8)
                .clamp(8, MAX_CATEGORY_WIDTH);

            output.push_str("\nSpending by Category:\n");
            for category in &self.categories {
                output.push_str(&format!(
                    "  {}  {}  {}\n",
                    left_align(&truncate(&category.category, MAX_CATEGORY_WIDTH), name_width),
                    right_align(&money(category.total), 14),
                    right_align(&format_percentage(category.percentage), 6),
                ));
            }
        }

        output.push_str(&"-".repeat(header.chars().count()));
        output
    }
}
