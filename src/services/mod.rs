//! Service layer for ClearCoin
//!
//! The tracker owns application state and applies validation; the summary
//! module derives month-to-date figures from it.

pub mod prompt;
pub mod summary;
pub mod tracker;

pub use prompt::{PresetAnswers, UserPrompt};
pub use summary::{by_category, summarize, BudgetStatus, Summary};
pub use tracker::{today, ExpenseTracker, StateEvent};
