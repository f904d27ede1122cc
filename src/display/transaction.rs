//! Transaction display formatting
//!
//! Renders a bucket as a table for the list command.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::transaction::DATE_FORMAT;
use crate::models::{Term, Transaction};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            date: txn.date.format(DATE_FORMAT).to_string(),
            kind: txn.kind.as_str(),
            amount: txn.amount.format_plain(),
            description: txn.description.clone(),
        }
    }
}

/// Format a bucket as a table, in insertion order
pub fn format_transaction_table(term: Term, transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return format!("No {} transactions found.\n", term.as_str().to_lowercase());
    }

    let rows: Vec<TransactionRow> = transactions.iter().map(TransactionRow::from).collect();
    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(2)).with(Alignment::right()));

    format!("{} transactions\n{}\n", term, table)
}
