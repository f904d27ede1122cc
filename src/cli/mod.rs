//! Interactive sessions
//!
//! This module bridges the menu-driven console surface with the service
//! layer. Both sessions read from any `BufRead` and write to any `Write`.

pub mod ledger;
pub mod prompt;
pub mod savings;

pub use ledger::{run_ledger, LedgerSession};
pub use prompt::Prompter;
pub use savings::{run_savings, SavingsSession};
