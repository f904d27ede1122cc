//! Core data models for Tally
//!
//! This module contains the data structures for both trackers: the ledger's
//! income/expense transactions and the savings budget's entries.

pub mod budget_entry;
pub mod money;
pub mod transaction;

pub use budget_entry::BudgetEntry;
pub use money::{Money, MoneyParseError};
pub use transaction::{parse_date, Term, Transaction, TransactionEdit, TransactionKind};
