//! Storage layer for Tally
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation for the two ledger buckets.

pub mod file_io;
pub mod transactions;

pub use file_io::{read_json, write_json_atomic};
pub use transactions::TransactionRepository;

use crate::config::paths::TallyPaths;
use crate::models::Term;

/// Storage coordinator holding one repository per term bucket
#[derive(Debug, Clone)]
pub struct Storage {
    pub short_term: TransactionRepository,
    pub long_term: TransactionRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: &TallyPaths) -> Self {
        Self {
            short_term: TransactionRepository::new(paths.short_term_file()),
            long_term: TransactionRepository::new(paths.long_term_file()),
        }
    }

    /// Repository backing the given bucket
    pub fn repository(&self, term: Term) -> &TransactionRepository {
        match term {
            Term::ShortTerm => &self.short_term,
            Term::LongTerm => &self.long_term,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_repository_per_term() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(&paths);

        assert_eq!(storage.repository(Term::ShortTerm).path(), paths.short_term_file());
        assert_eq!(storage.repository(Term::LongTerm).path(), paths.long_term_file());
    }
}
