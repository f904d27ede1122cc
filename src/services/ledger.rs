//! Ledger service
//!
//! `TransactionManager` keeps the short-term and long-term buckets in memory
//! and writes both back to disk whenever it is asked to save.

use tracing::{debug, info, warn};

use crate::error::TallyResult;
use crate::models::{Money, Term, Transaction, TransactionEdit};
use crate::storage::Storage;

/// Totals for one bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_income: Money,
    pub total_expense: Money,
    pub balance: Money,
}

/// Sum incomes and expenses; `balance = income - expense`
pub fn calculate_summary(transactions: &[Transaction]) -> Summary {
    let total_income: Money = transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();
    let total_expense: Money = transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum();

    Summary {
        total_income,
        total_expense,
        balance: total_income - total_expense,
    }
}

/// In-memory ledger backed by one file per bucket
pub struct TransactionManager {
    storage: Storage,
    short_term: Vec<Transaction>,
    long_term: Vec<Transaction>,
}

impl TransactionManager {
    /// Create an empty manager; call [`load`](Self::load) to read from disk
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            short_term: Vec::new(),
            long_term: Vec::new(),
        }
    }

    /// Append a transaction to the bucket matching its term
    pub fn add(&mut self, transaction: Transaction) {
        debug!(term = %transaction.term, "adding transaction");
        self.bucket_mut(transaction.term).push(transaction);
    }

    /// Append several transactions, routing each by its term
    pub fn extend(&mut self, transactions: impl IntoIterator<Item = Transaction>) {
        for transaction in transactions {
            self.add(transaction);
        }
    }

    /// Transactions in the given bucket, in insertion order
    pub fn list_by_term(&self, term: Term) -> &[Transaction] {
        match term {
            Term::ShortTerm => &self.short_term,
            Term::LongTerm => &self.long_term,
        }
    }

    /// Summary of the given bucket
    pub fn summary(&self, term: Term) -> Summary {
        calculate_summary(self.list_by_term(term))
    }

    /// Edit every transaction in `term` whose description matches
    ///
    /// `editor` is asked for replacement fields once per match, in bucket
    /// order. Both buckets are saved afterwards, even when nothing matched.
    /// Returns the number of transactions edited.
    pub fn edit<F>(&mut self, description: &str, term: Term, mut editor: F) -> TallyResult<usize>
    where
        F: FnMut(&Transaction) -> TallyResult<TransactionEdit>,
    {
        let mut edited = 0;
        for transaction in self
            .bucket_mut(term)
            .iter_mut()
            .filter(|t| t.description_matches(description))
        {
            let edit = editor(transaction)?;
            transaction.apply_edit(edit);
            edited += 1;
        }

        info!(description, %term, edited, "edited transactions");
        self.save()?;
        Ok(edited)
    }

    /// Overwrite both bucket files with the in-memory contents
    pub fn save(&self) -> TallyResult<()> {
        self.storage.short_term.save(&self.short_term)?;
        self.storage.long_term.save(&self.long_term)?;
        debug!(
            short_term = self.short_term.len(),
            long_term = self.long_term.len(),
            "saved transactions"
        );
        Ok(())
    }

    /// Replace the in-memory buckets with the file contents
    ///
    /// A bucket whose file is missing or corrupt comes back empty. Each such
    /// problem is logged and returned as a human-readable diagnostic.
    pub fn load(&mut self) -> Vec<String> {
        self.short_term.clear();
        self.long_term.clear();

        let mut diagnostics = Vec::new();
        for term in [Term::ShortTerm, Term::LongTerm] {
            match self.storage.repository(term).load() {
                Ok(transactions) => {
                    debug!(%term, count = transactions.len(), "loaded transactions");
                    self.extend(transactions);
                }
                Err(e) => {
                    warn!(%term, error = %e, "starting with an empty bucket");
                    diagnostics.push(format!(
                        "{} transactions file not found or is empty.",
                        term
                    ));
                }
            }
        }
        diagnostics
    }

    fn bucket_mut(&mut self, term: Term) -> &mut Vec<Transaction> {
        match term {
            Term::ShortTerm => &mut self.short_term,
            Term::LongTerm => &mut self.long_term,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TallyPaths;
    use crate::error::TallyError;
    use crate::models::{parse_date, TransactionKind};
    use tempfile::TempDir;

    fn manager(temp_dir: &TempDir) -> TransactionManager {
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        TransactionManager::new(Storage::new(&paths))
    }

    fn txn(kind: &str, amount: &str, description: &str, term: &str) -> Transaction {
        Transaction::parse(kind, amount, description, "2024-01-10", term).unwrap()
    }

    #[test]
    fn test_add_routes_by_term() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = manager(&temp_dir);

        manager.add(txn("income", "10", "a", "short-term"));
        manager.add(txn("expense", "5", "b", "LONG-TERM"));
        manager.add(txn("income", "1", "c", "Short-Term"));

        let short: Vec<_> = manager
            .list_by_term(Term::ShortTerm)
            .iter()
            .map(|t| t.description.as_str())
            .collect();
        let long: Vec<_> = manager
            .list_by_term(Term::LongTerm)
            .iter()
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(short, vec!["A", "C"]);
        assert_eq!(long, vec!["B"]);
        assert!(manager.list_by_term(Term::ShortTerm).iter().all(|t| t.term == Term::ShortTerm));
        assert!(manager.list_by_term(Term::LongTerm).iter().all(|t| t.term == Term::LongTerm));
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(calculate_summary(&[]), Summary::default());
    }

    #[test]
    fn test_summary_balance() {
        let transactions = vec![
            txn("income", "1200", "salary", "short-term"),
            txn("expense", "300.25", "rent", "short-term"),
            txn("expense", "99.75", "food", "short-term"),
            txn("income", "0.5", "interest", "short-term"),
        ];
        let summary = calculate_summary(&transactions);
        assert_eq!(summary.total_income.cents(), 120050);
        assert_eq!(summary.total_expense.cents(), 40000);
        assert_eq!(summary.balance.cents(), 80050);
        assert_eq!(summary.balance, summary.total_income - summary.total_expense);
    }

    #[test]
    fn test_summary_saturates_instead_of_overflowing() {
        let mut huge = txn("income", "1", "windfall", "short-term");
        huge.amount = Money::from_cents(i64::MAX);
        let transactions = vec![huge, txn("income", "1", "extra", "short-term")];

        let summary = calculate_summary(&transactions);
        assert_eq!(summary.total_income, Money::from_cents(i64::MAX));
        assert_eq!(summary.balance, Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_summary_negative_balance() {
        let summary = calculate_summary(&[txn("expense", "20", "fine", "long-term")]);
        assert_eq!(summary.balance.cents(), -2000);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = manager(&temp_dir);
        manager.add(txn("income", "1200.456", "salary", "short-term"));
        manager.add(txn("expense", "45", "groceries", "short-term"));
        manager.add(txn("income", "5000", "bonus", "long-term"));
        manager.save().unwrap();

        let mut reloaded = self::manager(&temp_dir);
        let diagnostics = reloaded.load();

        assert!(diagnostics.is_empty());
        assert_eq!(reloaded.list_by_term(Term::ShortTerm), manager.list_by_term(Term::ShortTerm));
        assert_eq!(reloaded.list_by_term(Term::LongTerm), manager.list_by_term(Term::LongTerm));
    }

    #[test]
    fn test_load_missing_files_gives_empty_buckets() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = manager(&temp_dir);

        let diagnostics = manager.load();

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].starts_with("Short-term"));
        assert!(diagnostics[1].starts_with("Long-term"));
        assert!(manager.list_by_term(Term::ShortTerm).is_empty());
        assert!(manager.list_by_term(Term::LongTerm).is_empty());
    }

    #[test]
    fn test_load_corrupt_file_keeps_other_bucket() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = manager(&temp_dir);
        manager.add(txn("income", "1", "kept", "long-term"));
        manager.save().unwrap();
        std::fs::write(temp_dir.path().join("short_term_transactions.json"), "{oops").unwrap();

        let mut reloaded = self::manager(&temp_dir);
        let diagnostics = reloaded.load();

        assert_eq!(diagnostics.len(), 1);
        assert!(reloaded.list_by_term(Term::ShortTerm).is_empty());
        assert_eq!(reloaded.list_by_term(Term::LongTerm).len(), 1);
    }

    #[test]
    fn test_load_routes_misfiled_records() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("short_term_transactions.json"),
            r#"[{"type": "Income", "amount": 3, "description": "Moved", "date": "2024-01-01", "term": "Long-term"}]"#,
        )
        .unwrap();
        std::fs::write(temp_dir.path().join("long_term_transactions.json"), "[]").unwrap();

        let mut manager = manager(&temp_dir);
        assert!(manager.load().is_empty());
        assert!(manager.list_by_term(Term::ShortTerm).is_empty());
        assert_eq!(manager.list_by_term(Term::LongTerm)[0].description, "Moved");
    }

    #[test]
    fn test_edit_matches_case_insensitively_within_term() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = manager(&temp_dir);
        manager.add(txn("expense", "10", "coffee", "short-term"));
        manager.add(txn("expense", "12", "Coffee", "short-term"));
        manager.add(txn("expense", "99", "coffee", "long-term"));
        manager.add(txn("expense", "3", "tea", "short-term"));

        let edited = manager
            .edit("COFFEE", Term::ShortTerm, |_| {
                Ok(TransactionEdit {
                    amount: Some(Money::from_cents(250)),
                    ..TransactionEdit::keep_all()
                })
            })
            .unwrap();

        assert_eq!(edited, 2);
        let short = manager.list_by_term(Term::ShortTerm);
        assert_eq!(short[0].amount.cents(), 250);
        assert_eq!(short[1].amount.cents(), 250);
        assert_eq!(short[2].amount.cents(), 300);
        assert_eq!(manager.list_by_term(Term::LongTerm)[0].amount.cents(), 9900);
    }

    #[test]
    fn test_edit_persists_changes() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = manager(&temp_dir);
        manager.add(txn("expense", "10", "coffee", "short-term"));

        manager
            .edit("coffee", Term::ShortTerm, |_| {
                Ok(TransactionEdit {
                    kind: Some(TransactionKind::Income),
                    description: Some("refund".into()),
                    date: Some(parse_date("2024-02-01").unwrap()),
                    ..TransactionEdit::keep_all()
                })
            })
            .unwrap();

        let mut reloaded = self::manager(&temp_dir);
        reloaded.load();
        let txn = &reloaded.list_by_term(Term::ShortTerm)[0];
        assert_eq!(txn.kind, TransactionKind::Income);
        assert_eq!(txn.description, "Refund");
        assert_eq!(txn.date, parse_date("2024-02-01").unwrap());
    }

    #[test]
    fn test_edit_with_blank_input_changes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = manager(&temp_dir);
        manager.add(txn("income", "10.5", "gift", "long-term"));
        let before = manager.list_by_term(Term::LongTerm).to_vec();

        let edited = manager
            .edit("gift", Term::LongTerm, |_| Ok(TransactionEdit::keep_all()))
            .unwrap();

        assert_eq!(edited, 1);
        assert_eq!(manager.list_by_term(Term::LongTerm), before.as_slice());
    }

    #[test]
    fn test_edit_without_match_still_saves() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = manager(&temp_dir);
        manager.add(txn("income", "1", "present", "short-term"));

        let edited = manager
            .edit("absent", Term::ShortTerm, |_| panic!("editor must not run"))
            .unwrap();

        assert_eq!(edited, 0);
        assert!(temp_dir.path().join("short_term_transactions.json").exists());
        assert!(temp_dir.path().join("long_term_transactions.json").exists());
    }

    #[test]
    fn test_edit_propagates_editor_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = manager(&temp_dir);
        manager.add(txn("income", "1", "present", "short-term"));

        let result = manager.edit("present", Term::ShortTerm, |_| Err(TallyError::InputClosed));

        assert!(matches!(result, Err(TallyError::InputClosed)));
    }
}
