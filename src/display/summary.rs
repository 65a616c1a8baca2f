//! Month-to-date summary formatting

use crate::models::{Category, Money};
use crate::services::Summary;

use super::report::{format_bar, format_money_for_status, format_percentage, separator};

const BAR_WIDTH: usize = 30;

/// Format the budget summary block
pub fn format_summary(summary: &Summary, symbol: &str, month_label: &str) -> String {
    let status = summary.status();
    let pct = summary.spent_percentage();

    let mut output = String::new();
    output.push_str(&format!("Budget Summary: {}\n", month_label));
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format!(
        "Total Budget:        {}\n",
        summary.budget.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Spent (This Month):  {}\n",
        summary.month_spent.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Remaining:           {} ({})\n",
        format_money_for_status(summary.remaining, symbol, status),
        status.label()
    ));
    output.push_str(&format!(
        "[{}] {}\n",
        format_bar(pct, 100.0, BAR_WIDTH),
        format_percentage(pct)
    ));
    output
}

/// Format month-to-date spend per category
pub fn format_category_breakdown(totals: &[(Category, Money)], symbol: &str) -> String {
    if totals.is_empty() {
        return "No spending this month.\n".to_string();
    }

    let max = totals
        .iter()
        .map(|(_, amount)| amount.cents())
        .max()
        .unwrap_or(0) as f64;

    let mut output = String::new();
    for (category, amount) in totals {
        output.push_str(&format!(
            "{:14} {:>12} {}\n",
            category.name(),
            amount.format_with_symbol(symbol),
            format_bar(amount.cents() as f64, max, 20)
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_summary() {
        let summary = Summary {
            budget: Money::from_cents(100_000),
            month_spent: Money::from_cents(450),
            remaining: Money::from_cents(99_550),
        };

        let output = format_summary(&summary, "$", "March 2025");
        assert!(output.contains("Budget Summary: March 2025"));
        assert!(output.contains("Total Budget:        $1000.00"));
        assert!(output.contains("Spent (This Month):  $4.50"));
        assert!(output.contains("$995.50"));
        assert!(output.contains("(ok)"));
        assert!(output.contains("0.45%"));
    }

    #[test]
    fn test_category_breakdown() {
        let output = format_category_breakdown(
            &[
                (Category::Food, Money::from_cents(2000)),
                (Category::Bills, Money::from_cents(1000)),
            ],
            "$",
        );
        assert!(output.contains("Food"));
        assert!(output.contains("$20.00"));
        assert_eq!(output.lines().count(), 2);

        assert_eq!(format_category_breakdown(&[], "$"), "No spending this month.\n");
    }
}
