//! Interactive menu loop
//!
//! Reads numbered choices and amounts line by line and drives a [`Session`].
//! Rejected input is reported and the loop keeps going; only I/O failures on
//! the terminal end it early.

use std::io::{BufRead, Write};

use tracing::warn;

use crate::error::{AmountField, LedgerError, LedgerResult};
use crate::ledger::ensure_non_negative;
use crate::models::Money;

use super::session::Session;

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddIncome,
    AddExpense,
    ViewBalance,
    SetBudgetGoal,
    ViewHistory,
    MonthlyReport,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        Self::AddIncome,
        Self::AddExpense,
        Self::ViewBalance,
        Self::SetBudgetGoal,
        Self::ViewHistory,
        Self::MonthlyReport,
        Self::Exit,
    ];

    /// Map a 1-based menu number to a choice
    pub fn from_number(n: u32) -> Option<Self> {
        let index = usize::try_from(n).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AddIncome => "Add Income",
            Self::AddExpense => "Add Expense",
            Self::ViewBalance => "View Balance",
            Self::SetBudgetGoal => "Set Budget Goal",
            Self::ViewHistory => "View Transaction History",
            Self::MonthlyReport => "Generate Monthly Report",
            Self::Exit => "Exit",
        }
    }
}

/// Whether the loop keeps running after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Run the menu until the user exits or input ends
pub fn run_menu<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    out: &mut W,
) -> LedgerResult<()> {
    loop {
        print_menu(out)?;

        let Some(line) = prompt(input, out, "Enter your choice: ")? else {
            return say_goodbye(out);
        };

        let choice = match line.trim().parse::<u32>() {
            Ok(n) => MenuChoice::from_number(n),
            Err(_) => {
                warn!(input = %line.trim(), "menu choice is not a number");
                writeln!(
                    out,
                    "{}",
                    LedgerError::Validation(format!("'{}' is not a number.", line.trim()))
                )?;
                continue;
            }
        };

        let Some(choice) = choice else {
            writeln!(out, "Invalid choice. Please try again.")?;
            continue;
        };

        match handle_choice(session, choice, input, out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => return say_goodbye(out),
            Err(e @ LedgerError::Io(_)) => return Err(e),
            Err(e) => {
                warn!(error = %e, "operation rejected");
                writeln!(out, "{}", e)?;
            }
        }
    }
}

fn handle_choice<R: BufRead, W: Write>(
    session: &mut Session,
    choice: MenuChoice,
    input: &mut R,
    out: &mut W,
) -> LedgerResult<Flow> {
    match choice {
        MenuChoice::AddIncome => {
            let Some(amount) = prompt_amount(input, out, "Enter income amount: ")? else {
                return Ok(Flow::Exit);
            };
            session.add_income(amount)?;
            writeln!(out, "Income added successfully.")?;
        }
        MenuChoice::AddExpense => {
            let Some(amount) = prompt_amount(input, out, "Enter expense amount: ")? else {
                return Ok(Flow::Exit);
            };
            ensure_non_negative(amount, AmountField::Expense)?;

            let Some(category) = prompt(
                input,
                out,
                "Enter expense category (e.g., Food, Transport, etc.): ",
            )?
            else {
                return Ok(Flow::Exit);
            };

            if let Some(notice) = session.add_expense(amount, category.trim())? {
                writeln!(out, "{}", notice.message(session.symbol()))?;
            }
            writeln!(out, "Expense added successfully.")?;
        }
        MenuChoice::ViewBalance => {
            writeln!(
                out,
                "Current Balance: {}",
                session.ledger().balance().format_with_symbol(session.symbol())
            )?;
        }
        MenuChoice::SetBudgetGoal => {
            let Some(goal) = prompt_amount(input, out, "Set monthly budget goal: ")? else {
                return Ok(Flow::Exit);
            };
            let notice = session.set_budget_goal(goal)?;
            writeln!(out, "{}", notice.message(session.symbol()))?;
        }
        MenuChoice::ViewHistory => {
            for line in session.ledger().view_transaction_history().lines(session.symbol()) {
                writeln!(out, "{}", line)?;
            }
        }
        MenuChoice::MonthlyReport => {
            let report = session.ledger().generate_monthly_report();
            writeln!(out, "{}", report.format_terminal(session.symbol()))?;
        }
        MenuChoice::Exit => return Ok(Flow::Exit),
    }

    Ok(Flow::Continue)
}

fn print_menu<W: Write>(out: &mut W) -> LedgerResult<()> {
    writeln!(out)?;
    for (i, choice) in MenuChoice::ALL.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, choice.label())?;
    }
    Ok(())
}

fn say_goodbye<W: Write>(out: &mut W) -> LedgerResult<()> {
    writeln!(out, "Exiting... Thank you!")?;
    out.flush()?;
    Ok(())
}

/// Print a prompt and read one line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> LedgerResult<Option<String>> {
    write!(out, "{}", message)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn prompt_amount<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> LedgerResult<Option<Money>> {
    let Some(line) = prompt(input, out, message)? else {
        return Ok(None);
    };

    Money::parse(&line)
        .map(Some)
        .map_err(|e| LedgerError::Validation(e.to_string()))
}
