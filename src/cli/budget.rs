//! Budget and summary CLI commands

use chrono::Datelike;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_category_breakdown, format_summary};
use crate::error::{ClearCoinError, ClearCoinResult};
use crate::models::Money;
use crate::services::{by_category, today, ExpenseTracker};
use crate::services::tracker::INVALID_BUDGET_MESSAGE;

use super::prompt::StdinPrompt;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show the monthly budget
    Show,

    /// Set the monthly budget
    Set {
        /// New budget (e.g., "1500" or "1500.00")
        amount: String,
    },

    /// Edit the monthly budget interactively
    Edit,
}

/// Handle a budget command
pub fn handle_budget_command(
    tracker: &mut ExpenseTracker,
    settings: &Settings,
    cmd: BudgetCommands,
) -> ClearCoinResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Show => {
            println!(
                "Monthly budget: {}",
                tracker.budget().format_with_symbol(symbol)
            );
        }

        BudgetCommands::Set { amount } => {
            let budget = Money::parse(&amount)
                .map_err(|_| ClearCoinError::Validation(INVALID_BUDGET_MESSAGE.into()))?;
            tracker.set_budget(budget)?;
            println!("Budget set to {}", budget.format_with_symbol(symbol));
        }

        BudgetCommands::Edit => {
            if tracker.edit_budget(&mut StdinPrompt::stdio())? {
                println!(
                    "Budget set to {}",
                    tracker.budget().format_with_symbol(symbol)
                );
            } else {
                println!("Budget unchanged.");
            }
        }
    }

    Ok(())
}

/// Print the month-to-date summary
pub fn handle_summary_command(
    tracker: &ExpenseTracker,
    settings: &Settings,
    categories: bool,
) -> ClearCoinResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let day = today();
    let summary = tracker.summary(day);

    print!("{}", format_summary(&summary, symbol, &month_label(day)));

    if categories {
        println!();
        print!(
            "{}",
            format_category_breakdown(&by_category(tracker.expenses(), day), symbol)
        );
    }

    Ok(())
}

/// "March 2025"
fn month_label(day: chrono::NaiveDate) -> String {
    format!("{} {}", day.format("%B"), day.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_month_label() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(month_label(day), "March 2025");
    }
}
