//! Savings budget report

use crate::services::Budget;

/// Entry list followed by the balance and savings lines
pub fn format_budget_report(budget: &Budget, currency_symbol: &str) -> String {
    let mut output = String::from("Transactions:\n");
    for entry in budget.entries() {
        output.push_str(&entry.describe(currency_symbol));
        output.push('\n');
    }
    output.push_str(&format!(
        "Current Balance: {}\nSavings: {}",
        budget.calculate_balance().format_with_symbol(currency_symbol),
        budget.savings().format_with_symbol(currency_symbol)
    ));
    output
}
