//! Query engine - derived analytics over an immutable record sequence
//!
//! All operations are pure, synchronous scans or aggregations:
//! - Aggregate sums and maxima over amounts
//! - Uniqueness counts over client names
//! - Compliance-issue status lookups
//! - Top-N ranking by amount
//! - Per-beneficiary grouping
//!
//! # Architecture
//!
//! The engine owns its record sequence exclusively and never mutates it
//! after construction. Ranking queries sort a derived index of borrows, so
//! the canonical input order stays observable through [`transactions`] for
//! the lifetime of the engine and every query is idempotent.
//!
//! [`transactions`]: TransactionQueryEngine::transactions
//!
//! # Critical Invariants
//!
//! 1. No query takes `&mut self` and no query performs I/O
//! 2. The stored sequence keeps source order; only derived copies are sorted
//! 3. Absence is never an error: unknown names and empty datasets produce
//!    identity values (0.0, false, empty collections, `None`)

use crate::ingest::{transactions_from_json, IngestionError};
use crate::models::Transaction;
use std::collections::{HashMap, HashSet};

/// Read-only analytical queries over a static transaction dataset
///
/// Constructed once in bulk from an already-parsed record sequence (or from
/// a JSON document via [`from_json`]). Because every operation borrows the
/// engine immutably, a constructed engine can be shared across readers
/// without locking.
///
/// [`from_json`]: TransactionQueryEngine::from_json
///
/// # Example
/// ```
/// use transaction_analytics_core_rs::{Transaction, TransactionQueryEngine};
///
/// let engine = TransactionQueryEngine::new(vec![
///     Transaction::new(1, 430.2, "Tom Shelby".to_string(), 22, "Alfie Solomons".to_string(), 33)
///         .with_issue(1, false, Some("Looks like money laundering".to_string())),
///     Transaction::new(2, 150.2, "Tom Shelby".to_string(), 22, "Arthur Shelby".to_string(), 60)
///         .with_issue(2, true, Some("Never gonna give you up".to_string())),
/// ]);
///
/// assert_eq!(engine.total_amount(), 430.2 + 150.2);
/// assert_eq!(engine.unique_client_count(), 3);
/// assert_eq!(engine.top_sender(), Some("Tom Shelby"));
/// ```
#[derive(Debug, Clone)]
pub struct TransactionQueryEngine {
    /// Canonical record sequence, in source order
    transactions: Vec<Transaction>,
}

impl TransactionQueryEngine {
    /// Create an engine over an already-parsed record sequence
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Create an engine from a JSON document of transaction records
    ///
    /// Ingestion either fully succeeds or aborts engine creation with a
    /// descriptive [`IngestionError`]. An empty document yields an engine
    /// with zero records.
    pub fn from_json(json: &str) -> Result<Self, IngestionError> {
        Ok(Self::new(transactions_from_json(json)?))
    }

    /// Get the canonical record sequence, in source order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of records held by the engine
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check if the engine holds no records
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of the amounts of all transactions
    ///
    /// Returns 0.0 for an empty dataset.
    pub fn total_amount(&self) -> f64 {
        self.transactions.iter().map(Transaction::amount).sum()
    }

    /// Sum of the amounts of all transactions sent by the given client
    ///
    /// An unknown sender name yields 0.0, not an error.
    pub fn total_amount_sent_by(&self, sender_full_name: &str) -> f64 {
        self.transactions
            .iter()
            .filter(|tx| tx.sender_full_name() == sender_full_name)
            .map(Transaction::amount)
            .sum()
    }

    /// Highest transaction amount
    ///
    /// Returns 0.0 for an empty dataset.
    pub fn max_amount(&self) -> f64 {
        self.transactions
            .iter()
            .map(Transaction::amount)
            .max_by(f64::total_cmp)
            .unwrap_or(0.0)
    }

    /// Number of distinct clients that sent or received a transaction
    ///
    /// Names are compared case-sensitively; reordering the dataset does not
    /// change the count.
    pub fn unique_client_count(&self) -> usize {
        let mut clients: HashSet<&str> = HashSet::new();
        for tx in &self.transactions {
            clients.insert(tx.sender_full_name());
            clients.insert(tx.beneficiary_full_name());
        }
        clients.len()
    }

    /// Whether a client has at least one transaction with an unsolved
    /// compliance issue
    ///
    /// The client may appear as sender or beneficiary. The solved flag is
    /// consulted regardless of whether an issue id is present, matching the
    /// upstream record semantics. Unknown names yield false.
    ///
    /// # Example
    /// ```
    /// use transaction_analytics_core_rs::{Transaction, TransactionQueryEngine};
    ///
    /// let engine = TransactionQueryEngine::new(vec![
    ///     Transaction::new(1, 430.2, "Tom Shelby".to_string(), 22, "Alfie Solomons".to_string(), 33)
    ///         .with_issue(1, false, None),
    /// ]);
    ///
    /// assert!(engine.has_open_compliance_issue("Tom Shelby"));
    /// assert!(engine.has_open_compliance_issue("Alfie Solomons"));
    /// assert!(!engine.has_open_compliance_issue("Arthur Shelby"));
    /// ```
    pub fn has_open_compliance_issue(&self, client_full_name: &str) -> bool {
        self.transactions
            .iter()
            .any(|tx| tx.involves(client_full_name) && !tx.issue_solved())
    }

    /// All transactions indexed by beneficiary name
    ///
    /// Built by scanning records in source order and overwriting on
    /// duplicate beneficiary names, so only the last record for each
    /// beneficiary survives. The map size therefore equals the number of
    /// distinct beneficiary names.
    pub fn transactions_by_beneficiary(&self) -> HashMap<&str, &Transaction> {
        let mut by_beneficiary: HashMap<&str, &Transaction> = HashMap::new();
        for tx in &self.transactions {
            by_beneficiary.insert(tx.beneficiary_full_name(), tx);
        }
        by_beneficiary
    }

    /// Identifiers of all unsolved compliance issues
    ///
    /// Records without an issue id never contribute, even when their solved
    /// flag is false.
    pub fn unsolved_issue_ids(&self) -> HashSet<u32> {
        self.transactions
            .iter()
            .filter(|tx| !tx.issue_solved())
            .filter_map(Transaction::issue_id)
            .collect()
    }

    /// Messages of all solved compliance issues, in record order
    ///
    /// Records whose message is absent are skipped; duplicate messages are
    /// retained.
    pub fn all_solved_issue_messages(&self) -> Vec<&str> {
        self.transactions
            .iter()
            .filter(|tx| tx.issue_solved())
            .filter_map(Transaction::issue_message)
            .collect()
    }

    /// Up to `n` transactions with the highest amounts, descending
    ///
    /// The sort is stable: transactions with equal amounts keep their
    /// relative source order. Sorting happens on a derived index of borrows,
    /// never on the stored sequence, so repeated calls (and every other
    /// query) observe the same canonical order.
    ///
    /// # Example
    /// ```
    /// use transaction_analytics_core_rs::{Transaction, TransactionQueryEngine};
    ///
    /// let engine = TransactionQueryEngine::new(vec![
    ///     Transaction::new(1, 150.2, "A".to_string(), 30, "B".to_string(), 40),
    ///     Transaction::new(2, 430.2, "C".to_string(), 50, "D".to_string(), 60),
    /// ]);
    ///
    /// let top = engine.top_transactions_by_amount(3);
    /// assert_eq!(top.len(), 2); // Fewer than n when the dataset is smaller
    /// assert_eq!(top[0].amount(), 430.2);
    /// assert_eq!(top[1].amount(), 150.2);
    /// ```
    pub fn top_transactions_by_amount(&self, n: usize) -> Vec<&Transaction> {
        let mut ranked: Vec<&Transaction> = self.transactions.iter().collect();
        ranked.sort_by(|a, b| b.amount().total_cmp(&a.amount()));
        ranked.truncate(n);
        ranked
    }

    /// Name of the sender with the greatest total sent amount
    ///
    /// Ties are broken deterministically in favor of the lexicographically
    /// smallest name. Returns `None` for an empty dataset.
    pub fn top_sender(&self) -> Option<&str> {
        let mut totals: HashMap<&str, f64> = HashMap::new();
        for tx in &self.transactions {
            *totals.entry(tx.sender_full_name()).or_insert(0.0) += tx.amount();
        }

        totals
            .into_iter()
            .max_by(|(name_a, total_a), (name_b, total_b)| {
                total_a
                    .total_cmp(total_b)
                    .then_with(|| name_b.cmp(name_a))
            })
            .map(|(name, _)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(id: u64, amount: f64, sender: &str, beneficiary: &str) -> Transaction {
        Transaction::new(id, amount, sender.to_string(), 30, beneficiary.to_string(), 40)
    }

    #[test]
    fn test_top_sender_tie_breaks_lexicographically() {
        // "Ada" and "Zed" both total 100.0; the smaller name wins.
        let engine = TransactionQueryEngine::new(vec![
            tx(1, 60.0, "Zed", "X"),
            tx(2, 100.0, "Ada", "X"),
            tx(3, 40.0, "Zed", "Y"),
        ]);

        assert_eq!(engine.top_sender(), Some("Ada"));
    }

    #[test]
    fn test_top_sender_empty_dataset() {
        let engine = TransactionQueryEngine::new(Vec::new());
        assert_eq!(engine.top_sender(), None);
    }

    #[test]
    fn test_top_ranking_does_not_reorder_canonical_sequence() {
        let engine = TransactionQueryEngine::new(vec![
            tx(1, 10.0, "A", "B"),
            tx(2, 30.0, "C", "D"),
            tx(3, 20.0, "E", "F"),
        ]);

        let before: Vec<u64> = engine.transactions().iter().map(Transaction::transaction_id).collect();
        let _ = engine.top_transactions_by_amount(2);
        let after: Vec<u64> = engine.transactions().iter().map(Transaction::transaction_id).collect();

        assert_eq!(before, after);
        assert_eq!(after, vec![1, 2, 3]);
    }
}
