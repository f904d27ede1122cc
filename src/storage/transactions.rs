//! Transaction repository for JSON storage
//!
//! Each term bucket lives in its own file holding a flat JSON array of
//! transaction records in insertion order.

use std::path::{Path, PathBuf};

use crate::error::TallyError;
use crate::models::Transaction;

use super::file_io::{read_json, write_json_atomic};

/// Repository for one bucket file
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    path: PathBuf,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record in the file
    ///
    /// A missing or unparsable file is an error; the caller decides whether
    /// to recover.
    pub fn load(&self) -> Result<Vec<Transaction>, TallyError> {
        read_json(&self.path)
    }

    /// Overwrite the file with the given transactions
    pub fn save(&self, transactions: &[Transaction]) -> Result<(), TallyError> {
        write_json_atomic(&self.path, transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_date, Money, Term, TransactionKind};
    use tempfile::TempDir;

    fn txn(description: &str, cents: i64) -> Transaction {
        Transaction::new(
            TransactionKind::Income,
            Money::from_cents(cents),
            description,
            parse_date("2024-01-01").unwrap(),
            Term::LongTerm,
        )
    }

    #[test]
    fn test_save_and_load_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TransactionRepository::new(temp_dir.path().join("long.json"));

        let transactions = vec![txn("b", 1), txn("a", 2), txn("c", 3)];
        repo.save(&transactions).unwrap();

        assert_eq!(repo.load().unwrap(), transactions);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TransactionRepository::new(temp_dir.path().join("missing.json"));

        assert!(repo.load().is_err());
    }

    #[test]
    fn test_save_empty_bucket() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TransactionRepository::new(temp_dir.path().join("empty.json"));

        repo.save(&[]).unwrap();

        assert_eq!(std::fs::read_to_string(repo.path()).unwrap(), "[]");
        assert!(repo.load().unwrap().is_empty());
    }
}
