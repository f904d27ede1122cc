//! Tally - terminal income, expense and savings tracker
//!
//! This library provides the core functionality for the `tally` binary. It
//! contains two independent trackers:
//!
//! - a **ledger** that files income and expense transactions into short-term
//!   and long-term buckets, persists each bucket to its own JSON file and
//!   prints totals and bar-chart summaries
//! - a **savings budget** that keeps a flat list of entries, a savings
//!   balance and compound-interest projections in memory
//!
//! # Architecture
//!
//! - `config`: Data directory and settings
//! - `error`: Custom error types
//! - `models`: Money, ledger transactions and budget entries
//! - `storage`: JSON file storage layer
//! - `services`: Ledger, recurring schedules and savings budget logic
//! - `display`: Terminal formatting
//! - `cli`: Interactive menu sessions
//!
//! # Example
//!
//! ```rust,ignore
//! use tally::config::TallyPaths;
//! use tally::services::TransactionManager;
//! use tally::storage::Storage;
//!
//! let mut manager = TransactionManager::new(Storage::new(&TallyPaths::new()?));
//! for diagnostic in manager.load() {
//!     eprintln!("{}", diagnostic);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TallyError, TallyResult};
