//! Expense model
//!
//! A single recorded spend. Expenses are immutable once created; the only
//! lifecycle events are creation and deletion.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// A recorded expense
///
/// The serialized shape is `{id, title, amount, category, date}` with the
/// date as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier (creation timestamp)
    pub id: ExpenseId,

    /// What the money was spent on
    pub title: String,

    /// Amount spent, always positive
    pub amount: Money,

    /// Spending category
    pub category: Category,

    /// Calendar date of the spend
    pub date: NaiveDate,
}

impl Expense {
    /// Create a new expense with the given id
    pub fn new(
        id: ExpenseId,
        title: impl Into<String>,
        amount: Money,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            amount,
            category,
            date,
        }
    }

    /// Check whether the expense falls in the same calendar month and year as `day`
    pub fn in_month_of(&self, day: NaiveDate) -> bool {
        self.date.year() == day.year() && self.date.month() == day.month()
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.title.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyTitle);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, {})",
            self.title,
            self.amount,
            self.category,
            self.date.format("%Y-%m-%d")
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyTitle,
    NonPositiveAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Expense title cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be greater than zero (got {})", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// Transient add-expense form fields
///
/// Holds raw text the way the user typed it; parsing happens on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseForm {
    pub title: String,
    pub amount: String,
    pub category: Category,
    /// Date as typed, expected `YYYY-MM-DD`
    pub date: String,
    /// Whether the form is shown
    pub visible: bool,
}

impl ExpenseForm {
    /// Create an empty, hidden form dated `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            amount: String::new(),
            category: Category::default(),
            date: today.format("%Y-%m-%d").to_string(),
            visible: false,
        }
    }

    /// Reset all fields to their defaults and hide the form
    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }
}
