//! Formatting helpers shared by the CLI views

use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::Money;
use crate::services::BudgetStatus;

/// ANSI colour code for a budget status
fn status_color(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::Ok => "\x1b[32m",
        BudgetStatus::Warning => "\x1b[33m",
        BudgetStatus::Over => "\x1b[31m",
        BudgetStatus::Neutral => "\x1b[90m",
    }
}

/// Format a money amount coloured by budget status
pub fn format_money_for_status(amount: Money, symbol: &str, status: BudgetStatus) -> String {
    format!(
        "{}{}\x1b[0m",
        status_color(status),
        amount.format_with_symbol(symbol)
    )
}

/// Format a percentage to two decimal places
pub fn format_percentage(pct: f64) -> String {
    format!("{:.2}%", pct)
}

/// Format a date with a strftime pattern, falling back to `%Y-%m-%d`
/// when the pattern cannot render a plain date
pub fn format_date(date: NaiveDate, format: &str) -> String {
    let mut output = String::new();
    match write!(output, "{}", date.format(format)) {
        Ok(()) => output,
        Err(_) => date.format("%Y-%m-%d").to_string(),
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
