//! Summary formatting
//!
//! Text totals and the proportional bar chart for a ledger bucket.

use crate::models::Money;
use crate::services::Summary;

/// Smallest denominator used when scaling the bars
const MIN_SCALE: Money = Money::from_cents(100);

/// "Total Income: 1200.00, Total Expense: 400.00, Balance: 800.00"
pub fn format_summary(summary: &Summary) -> String {
    format!(
        "Total Income: {}, Total Expense: {}, Balance: {}",
        summary.total_income.format_plain(),
        summary.total_expense.format_plain(),
        summary.balance.format_plain()
    )
}

/// Bar length for `amount` relative to `scale`, floored, never negative
pub fn bar_length(amount: Money, scale: Money, width: usize) -> usize {
    if !amount.is_positive() || !scale.is_positive() {
        return 0;
    }
    let scaled = i128::from(amount.cents()) * width as i128 / i128::from(scale.cents());
    usize::try_from(scaled).unwrap_or(width).min(width)
}

/// Income and expense bars scaled against the larger of the two (at least 1.00)
pub fn format_visual_summary(summary: &Summary, width: usize) -> String {
    let scale = summary
        .total_income
        .max(summary.total_expense)
        .max(MIN_SCALE);

    let income_bar = "|".repeat(bar_length(summary.total_income, scale, width));
    let expense_bar = "|".repeat(bar_length(summary.total_expense, scale, width));

    format!(
        "Visual Summary:\nIncome  : {} ({})\nExpense : {} ({})",
        income_bar,
        summary.total_income.format_plain(),
        expense_bar,
        summary.total_expense.format_plain()
    )
}
