//! Recurring transaction generation
//!
//! Expands a single transaction into one copy per period between a start and
//! an end date, both inclusive. A "month" is a flat 30 days, so monthly
//! schedules drift against the calendar.

use chrono::{Days, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::error::TallyError;
use crate::models::Transaction;

/// How often a recurring transaction repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Weekly,
    Monthly,
}

impl Frequency {
    /// Days between occurrences
    pub fn step_days(&self) -> u64 {
        match self {
            Self::Weekly => 7,
            Self::Monthly => 30,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
        }
    }
}

impl FromStr for Frequency {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(TallyError::validation(format!(
                "Invalid frequency '{}': expected weekly or monthly",
                s.trim()
            ))),
        }
    }
}

/// Every occurrence date from `start` through `end`
pub fn occurrence_dates(start: NaiveDate, end: NaiveDate, frequency: Frequency) -> Vec<NaiveDate> {
    let step = Days::new(frequency.step_days());
    let mut dates = Vec::new();
    let mut current = Some(start);

    while let Some(date) = current.filter(|d| *d <= end) {
        dates.push(date);
        current = date.checked_add_days(step);
    }
    dates
}

/// Copies of `template` dated on each occurrence, starting at the template's date
pub fn generate(template: &Transaction, end: NaiveDate, frequency: Frequency) -> Vec<Transaction> {
    occurrence_dates(template.date, end, frequency)
        .into_iter()
        .map(|date| template.on_date(date))
        .collect()
}
