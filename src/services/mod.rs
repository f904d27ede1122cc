//! Business logic layer for Tally
//!
//! The ledger (term buckets, summaries, recurring schedules) and the savings
//! budget are independent: they share the `Money` type and nothing else.

pub mod budget;
pub mod ledger;
pub mod recurring;

pub use budget::Budget;
pub use ledger::{calculate_summary, Summary, TransactionManager};
pub use recurring::Frequency;
