//! Transaction model
//!
//! Represents a single money transfer between two clients.
//! Each transaction has:
//! - A numeric transaction identifier (the wire field `mtn`)
//! - Amount (f64, non-negative in practice)
//! - Sender and beneficiary full names and ages
//! - Optional compliance-issue annotation (id, solved flag, message)
//!
//! CRITICAL: records are immutable once constructed. The query layer only
//! ever reads them; nothing in this crate mutates a stored record.

use serde::{Deserialize, Serialize};

/// A single financial transaction between a sender and a beneficiary
///
/// Clients are identified purely by full-name string equality. Two distinct
/// people sharing a name collapse into one "client". This is a known
/// limitation of the upstream data, preserved here rather than papered over
/// with a synthetic identity key.
///
/// The serde field names follow the upstream record format (`mtn`,
/// `senderFullName`, ...), so a record deserializes directly from the
/// source JSON.
///
/// # Example
/// ```
/// use transaction_analytics_core_rs::Transaction;
///
/// let tx = Transaction::new(
///     663458,
///     430.2,
///     "Tom Shelby".to_string(),
///     22,
///     "Alfie Solomons".to_string(),
///     33,
/// )
/// .with_issue(1, false, Some("Looks like money laundering".to_string()));
///
/// assert_eq!(tx.sender_full_name(), "Tom Shelby");
/// assert!(tx.has_issue());
/// assert!(!tx.issue_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction identifier (unique per record in practice, not enforced)
    #[serde(rename = "mtn")]
    transaction_id: u64,

    /// Transferred amount
    amount: f64,

    /// Sender full name (required, non-null)
    sender_full_name: String,

    /// Sender age in years
    sender_age: u32,

    /// Beneficiary full name (required, non-null)
    beneficiary_full_name: String,

    /// Beneficiary age in years
    beneficiary_age: u32,

    /// Compliance issue identifier
    ///
    /// `None` means no issue was ever raised for this transaction (the wire
    /// format carries either an explicit null or no field at all).
    #[serde(default)]
    issue_id: Option<u32>,

    /// Whether the compliance issue was solved
    ///
    /// Meaningless when `issue_id` is `None`, but the upstream data always
    /// carries the flag and the open-issue query consults it regardless of
    /// issue presence, so it is kept as a plain bool.
    issue_solved: bool,

    /// Free-text message attached to the compliance issue
    ///
    /// May be null even when an issue exists.
    #[serde(default)]
    issue_message: Option<String>,
}

impl Transaction {
    /// Create a transaction with no compliance issue
    ///
    /// The issue annotation defaults to solved-with-no-id, which is how
    /// issue-free records appear in the upstream data.
    ///
    /// # Example
    /// ```
    /// use transaction_analytics_core_rs::Transaction;
    ///
    /// let tx = Transaction::new(
    ///     1284564,
    ///     150.2,
    ///     "Tom Shelby".to_string(),
    ///     22,
    ///     "Arthur Shelby".to_string(),
    ///     60,
    /// );
    ///
    /// assert!(!tx.has_issue());
    /// assert!(tx.issue_solved());
    /// ```
    pub fn new(
        transaction_id: u64,
        amount: f64,
        sender_full_name: String,
        sender_age: u32,
        beneficiary_full_name: String,
        beneficiary_age: u32,
    ) -> Self {
        Self {
            transaction_id,
            amount,
            sender_full_name,
            sender_age,
            beneficiary_full_name,
            beneficiary_age,
            issue_id: None,
            issue_solved: true,
            issue_message: None,
        }
    }

    /// Attach a compliance issue (builder pattern)
    ///
    /// # Example
    /// ```
    /// use transaction_analytics_core_rs::Transaction;
    ///
    /// let tx = Transaction::new(1, 100.0, "A".to_string(), 30, "B".to_string(), 40)
    ///     .with_issue(3, true, Some("Never gonna give you up".to_string()));
    ///
    /// assert_eq!(tx.issue_id(), Some(3));
    /// assert_eq!(tx.issue_message(), Some("Never gonna give you up"));
    /// ```
    pub fn with_issue(mut self, issue_id: u32, solved: bool, message: Option<String>) -> Self {
        self.issue_id = Some(issue_id);
        self.issue_solved = solved;
        self.issue_message = message;
        self
    }

    /// Get the transaction identifier
    pub fn transaction_id(&self) -> u64 {
        self.transaction_id
    }

    /// Get the transferred amount
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Get the sender full name
    pub fn sender_full_name(&self) -> &str {
        &self.sender_full_name
    }

    /// Get the sender age
    pub fn sender_age(&self) -> u32 {
        self.sender_age
    }

    /// Get the beneficiary full name
    pub fn beneficiary_full_name(&self) -> &str {
        &self.beneficiary_full_name
    }

    /// Get the beneficiary age
    pub fn beneficiary_age(&self) -> u32 {
        self.beneficiary_age
    }

    /// Get the compliance issue id, if an issue was raised
    pub fn issue_id(&self) -> Option<u32> {
        self.issue_id
    }

    /// Whether the compliance issue is marked solved
    ///
    /// Consulted by the open-issue query even when no issue id is present
    /// (matching the upstream data semantics).
    pub fn issue_solved(&self) -> bool {
        self.issue_solved
    }

    /// Get the compliance issue message, if any
    pub fn issue_message(&self) -> Option<&str> {
        self.issue_message.as_deref()
    }

    /// Check if a compliance issue was ever raised for this transaction
    pub fn has_issue(&self) -> bool {
        self.issue_id.is_some()
    }

    /// Check if the given client appears as sender or beneficiary
    ///
    /// Names are compared case-sensitively with exact string equality.
    ///
    /// # Example
    /// ```
    /// use transaction_analytics_core_rs::Transaction;
    ///
    /// let tx = Transaction::new(1, 50.0, "A".to_string(), 30, "B".to_string(), 40);
    /// assert!(tx.involves("A"));
    /// assert!(tx.involves("B"));
    /// assert!(!tx.involves("a"));
    /// ```
    pub fn involves(&self, client_full_name: &str) -> bool {
        self.sender_full_name == client_full_name || self.beneficiary_full_name == client_full_name
    }
}
