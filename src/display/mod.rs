//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and the budget summary for the
//! command-line interface.

pub mod expense;
pub mod report;
pub mod summary;

pub use expense::{format_expense_details, format_expense_list};
pub use summary::{format_category_breakdown, format_summary};
