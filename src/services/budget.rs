//! Savings budget service
//!
//! A flat list of entries plus a savings balance that earns a fixed
//! per-period interest rate. The savings balance only ever grows: salary
//! entries and direct contributions add to it and nothing recomputes it from
//! the entry history.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{BudgetEntry, Money};

/// Default per-period savings interest rate
pub const DEFAULT_INTEREST_RATE: f64 = 0.05;

#[derive(Debug, Clone)]
pub struct Budget {
    entries: Vec<BudgetEntry>,
    savings: Money,
    savings_interest_rate: f64,
}

impl Default for Budget {
    fn default() -> Self {
        Self::new(DEFAULT_INTEREST_RATE)
    }
}

impl Budget {
    pub fn new(savings_interest_rate: f64) -> Self {
        Self {
            entries: Vec::new(),
            savings: Money::zero(),
            savings_interest_rate,
        }
    }

    pub fn entries(&self) -> &[BudgetEntry] {
        &self.entries
    }

    pub fn savings(&self) -> Money {
        self.savings
    }

    pub fn savings_interest_rate(&self) -> f64 {
        self.savings_interest_rate
    }

    /// Record an entry; salary entries also go to savings
    pub fn add_transaction(
        &mut self,
        amount: Money,
        transaction_type: impl Into<String>,
        date: Option<NaiveDate>,
    ) -> &BudgetEntry {
        let entry = BudgetEntry::new(amount, transaction_type, date);
        if entry.is_salary() {
            self.savings += amount;
        }
        debug!(kind = %entry.transaction_type, amount = %amount, "budget entry added");
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Salary entries minus every other entry
    pub fn calculate_balance(&self) -> Money {
        self.entries.iter().map(BudgetEntry::signed_amount).sum()
    }

    pub fn add_to_savings(&mut self, amount: Money) {
        self.savings += amount;
    }

    /// Interest earned on the current savings over `months` periods
    pub fn calculate_savings_interest(&self, months: u32) -> Money {
        let growth = (1.0 + self.savings_interest_rate).powf(f64::from(months)) - 1.0;
        round_cents(self.savings.cents() as f64 * growth)
    }

    /// Savings after `months` periods of growth plus a fixed contribution
    ///
    /// Each period applies `savings * (1 + rate) + contribution`.
    pub fn project_future_savings(&self, monthly_contribution: Money, months: u32) -> Money {
        let rate = 1.0 + self.savings_interest_rate;
        let contribution = monthly_contribution.cents() as f64;

        let future = (0..months).fold(self.savings.cents() as f64, |acc, _| {
            acc * rate + contribution
        });
        round_cents(future)
    }
}

/// Round a value in cents to a whole cent, saturating at the representable range
fn round_cents(cents: f64) -> Money {
    Money::from_f64(cents / 100.0).unwrap_or_else(|| {
        if cents.is_sign_negative() {
            Money::from_cents(i64::MIN)
        } else {
            Money::from_cents(i64::MAX)
        }
    })
}
