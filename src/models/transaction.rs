//! Ledger transaction model
//!
//! A transaction is an income or expense filed under a term (short-term or
//! long-term). Construction normalizes the free-text fields the same way
//! every time, so a transaction read back from disk or edited in place looks
//! exactly like a freshly entered one.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::TallyError;

/// Date format used for input, display and storage
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(TallyError::validation(format!(
                "Invalid type '{}': expected Income or Expense",
                s.trim()
            ))),
        }
    }
}

/// Which bucket a transaction belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Term {
    ShortTerm,
    LongTerm,
}

impl Term {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShortTerm => "Short-term",
            Self::LongTerm => "Long-term",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Term {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short-term" => Ok(Self::ShortTerm),
            "long-term" => Ok(Self::LongTerm),
            _ => Err(TallyError::validation(format!(
                "Invalid term '{}': expected short-term or long-term",
                s.trim()
            ))),
        }
    }
}

macro_rules! serde_via_str {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

serde_via_str!(TransactionKind);
serde_via_str!(Term);

/// Parse a date in the exact `YYYY-MM-DD` form
///
/// Unpadded forms such as `2024-1-5` are rejected, as are impossible dates
/// such as `2023-02-29`.
pub fn parse_date(s: &str) -> Result<NaiveDate, TallyError> {
    let s = s.trim();
    let invalid = || TallyError::validation(format!("Invalid date '{}': use YYYY-MM-DD", s));

    let shape_ok = s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| invalid())
}

/// Upper-case the first character and lower-case the rest
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// A ledger transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    pub amount: Money,

    #[serde(deserialize_with = "deserialize_description")]
    pub description: String,

    /// Stored as `YYYY-MM-DD`
    pub date: NaiveDate,

    pub term: Term,
}

fn deserialize_description<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    String::deserialize(deserializer).map(|s| capitalize(&s))
}

impl Transaction {
    /// Create a new transaction, normalizing the description
    pub fn new(
        kind: TransactionKind,
        amount: Money,
        description: impl AsRef<str>,
        date: NaiveDate,
        term: Term,
    ) -> Self {
        Self {
            kind,
            amount,
            description: capitalize(description.as_ref()),
            date,
            term,
        }
    }

    /// Build a transaction from raw text fields
    ///
    /// Every field goes through the same validation the prompts apply.
    pub fn parse(
        kind: &str,
        amount: &str,
        description: &str,
        date: &str,
        term: &str,
    ) -> Result<Self, TallyError> {
        let amount = Money::parse(amount)
            .map_err(|e| TallyError::validation(e.to_string()))?;
        Ok(Self::new(
            kind.parse()?,
            amount,
            description,
            parse_date(date)?,
            term.parse()?,
        ))
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Case-insensitive description comparison
    pub fn description_matches(&self, description: &str) -> bool {
        self.description.to_lowercase() == description.trim().to_lowercase()
    }

    /// Copy of this transaction on another date
    pub fn on_date(&self, date: NaiveDate) -> Self {
        Self {
            date,
            ..self.clone()
        }
    }

    /// Apply replacement fields; `None` keeps the current value
    pub fn apply_edit(&mut self, edit: TransactionEdit) {
        if let Some(kind) = edit.kind {
            self.kind = kind;
        }
        if let Some(amount) = edit.amount {
            self.amount = amount;
        }
        if let Some(description) = edit.description {
            self.description = capitalize(&description);
        }
        if let Some(date) = edit.date {
            self.date = date;
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}: {} - {} ({})",
            self.date.format(DATE_FORMAT),
            self.kind,
            self.amount.format_plain(),
            self.description,
            self.term
        )
    }
}

/// Replacement fields collected while editing a transaction
///
/// The term is not editable: moving a transaction between buckets is not
/// an edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionEdit {
    pub kind: Option<TransactionKind>,
    pub amount: Option<Money>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

impl TransactionEdit {
    /// An edit that changes nothing
    pub fn keep_all() -> Self {
        Self::default()
    }
}
