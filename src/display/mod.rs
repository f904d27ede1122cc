//! Display formatting for terminal output

pub mod budget;
pub mod summary;
pub mod transaction;

pub use budget::format_budget_report;
pub use summary::{format_summary, format_visual_summary};
pub use transaction::format_transaction_table;
