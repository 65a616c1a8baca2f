//! Core data models for ClearCoin
//!
//! Expenses, their categories, and the money type used for amounts and the
//! budget.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::Category;
pub use expense::{Expense, ExpenseForm, ExpenseValidationError};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
