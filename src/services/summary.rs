//! Spending summary
//!
//! Month-to-date spend and remaining budget, derived from the expense
//! collection, the budget and the current date. Nothing here is stored.

use chrono::NaiveDate;

use crate::models::{Category, Expense, Money};

/// How the remaining budget compares to the whole budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// More than a quarter of the budget left
    Ok,
    /// Some budget left, a quarter or less
    Warning,
    /// Nothing left or overspent
    Over,
    /// No budget set
    Neutral,
}

impl BudgetStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warning => "warning",
            Self::Over => "over",
            Self::Neutral => "neutral",
        }
    }
}

/// Month-to-date figures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub budget: Money,
    /// Sum of expenses dated in the current month and year
    pub month_spent: Money,
    /// `budget - month_spent`, may be negative
    pub remaining: Money,
}

impl Summary {
    /// Share of the budget spent, clamped to 0..=100; 0 without a budget
    pub fn spent_percentage(&self) -> f64 {
        if !self.budget.is_positive() {
            return 0.0;
        }
        let pct = self.month_spent.cents() as f64 / self.budget.cents() as f64 * 100.0;
        pct.clamp(0.0, 100.0)
    }

    /// Classify the remaining budget relative to the whole budget
    pub fn status(&self) -> BudgetStatus {
        if !self.budget.is_positive() {
            return BudgetStatus::Neutral;
        }
        // remaining / budget > 0.25, kept in integers
        let remaining = self.remaining.cents() as i128;
        let budget = self.budget.cents() as i128;
        if remaining * 4 > budget {
            BudgetStatus::Ok
        } else if remaining > 0 {
            BudgetStatus::Warning
        } else {
            BudgetStatus::Over
        }
    }
}

/// Compute the summary for the month containing `today`
pub fn summarize(expenses: &[Expense], budget: Money, today: NaiveDate) -> Summary {
    let month_spent: Money = expenses
        .iter()
        .filter(|e| e.in_month_of(today))
        .map(|e| e.amount)
        .sum();

    Summary {
        budget,
        month_spent,
        remaining: budget - month_spent,
    }
}

/// Month-to-date spend per category, in category order, skipping empty ones
pub fn by_category(expenses: &[Expense], today: NaiveDate) -> Vec<(Category, Money)> {
    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let total: Money = expenses
                .iter()
                .filter(|e| e.category == category && e.in_month_of(today))
                .map(|e| e.amount)
                .sum();
            total.is_positive().then_some((category, total))
        })
        .collect()
}
