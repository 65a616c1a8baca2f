//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod prompt;

pub use budget::{handle_budget_command, handle_summary_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use prompt::StdinPrompt;
