//! Expense CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::{ClearCoinError, ClearCoinResult};
use crate::models::{Category, ExpenseId};
use crate::services::{today, ExpenseTracker, PresetAnswers};

use super::prompt::StdinPrompt;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        title: String,
        /// Amount (e.g., "4.50")
        amount: String,
        /// Category: Food, Transport, Bills, Entertainment or Other
        #[arg(short, long, default_value = "Food")]
        category: String,
        /// Date of the expense (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses, newest first
    List {
        /// Number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show one expense
    Show {
        /// Expense ID
        id: String,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    tracker: &mut ExpenseTracker,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ClearCoinResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            title,
            amount,
            category,
            date,
        } => {
            let category = Category::parse(&category).ok_or_else(|| {
                ClearCoinError::Validation(format!(
                    "Unknown category '{}'. Choose one of: Food, Transport, Bills, Entertainment, Other",
                    category
                ))
            })?;
            let date = match date {
                Some(text) => parse_date(&text)?,
                None => today(),
            };

            let expense = tracker.add_expense(&title, &amount, category, date)?;
            println!(
                "Added expense: {} ({})",
                expense.title,
                expense.amount.format_with_symbol(symbol)
            );
            println!("  ID: {}", expense.id);
        }

        ExpenseCommands::List { limit } => {
            let expenses = tracker.expenses();
            let shown = limit.unwrap_or(expenses.len()).min(expenses.len());
            print!(
                "{}",
                format_expense_list(&expenses[..shown], symbol, &settings.date_format)
            );
            if shown < expenses.len() {
                println!("Showing {} of {} expenses", shown, expenses.len());
            }
        }

        ExpenseCommands::Show { id } => {
            let id = parse_id(&id);
            let expense = tracker
                .find(&id)
                .ok_or_else(|| ClearCoinError::expense_not_found(id.to_string()))?;
            print!(
                "{}",
                format_expense_details(expense, symbol, &settings.date_format)
            );
        }

        ExpenseCommands::Delete { id, yes } => {
            let id = parse_id(&id);
            let expense = tracker
                .find(&id)
                .cloned()
                .ok_or_else(|| ClearCoinError::expense_not_found(id.to_string()))?;

            println!("About to delete expense: {}", expense);
            let deleted = if yes {
                tracker.delete_expense(&id, &mut PresetAnswers::yes())
            } else {
                tracker.delete_expense(&id, &mut StdinPrompt::stdio())
            };

            if deleted {
                println!("Deleted expense: {}", expense.title);
            } else {
                println!("Aborted.");
            }
        }
    }

    Ok(())
}

fn parse_id(raw: &str) -> ExpenseId {
    ExpenseId::from(raw.trim())
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(text: &str) -> ClearCoinResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| {
        ClearCoinError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", text))
    })
}
