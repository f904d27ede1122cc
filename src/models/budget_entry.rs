//! Savings budget entry model
//!
//! Entries in the savings budget carry a free-form type such as "salary" or
//! "bill". Only salary entries count as income; everything else is treated
//! as a deduction.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

use super::money::Money;
use super::transaction::{capitalize, DATE_FORMAT};

/// Entry type that counts as income and feeds the savings balance
pub const SALARY: &str = "salary";

/// A single savings budget entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetEntry {
    pub amount: Money,

    /// Free-form type, e.g. "salary", "bill", "rent"
    pub transaction_type: String,

    pub date: NaiveDateTime,
}

impl BudgetEntry {
    /// Create an entry; a missing date means "now"
    pub fn new(
        amount: Money,
        transaction_type: impl Into<String>,
        date: Option<NaiveDate>,
    ) -> Self {
        let date = match date {
            Some(day) => day.and_time(NaiveTime::MIN),
            None => Local::now().naive_local(),
        };
        Self {
            amount,
            transaction_type: transaction_type.into(),
            date,
        }
    }

    /// Exact match: "Salary" is a deduction like any other type
    pub fn is_salary(&self) -> bool {
        self.transaction_type == SALARY
    }

    /// Signed contribution to the balance
    pub fn signed_amount(&self) -> Money {
        if self.is_salary() {
            self.amount
        } else {
            -self.amount
        }
    }

    /// e.g. "Salary of $1000.00 on 2024-01-15"
    pub fn describe(&self, currency_symbol: &str) -> String {
        format!(
            "{} of {} on {}",
            capitalize(&self.transaction_type),
            self.amount.format_with_symbol(currency_symbol),
            self.date.format(DATE_FORMAT)
        )
    }
}
