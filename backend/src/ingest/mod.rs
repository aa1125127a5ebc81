//! Ingestion boundary - JSON record sequence to domain records
//!
//! The query layer is agnostic to how its records were produced; this module
//! is the one place that knows the upstream wire format. Input is a JSON
//! array of transaction records using the upstream field names (`mtn`,
//! `senderFullName`, ...).
//!
//! # Critical Invariants
//!
//! 1. Ingestion either fully succeeds or fully aborts - no partially
//!    constructed record ever reaches the engine
//! 2. An empty or all-whitespace source yields zero records, not an error
//! 3. The record order of the source document is preserved

use crate::models::Transaction;
use thiserror::Error;
use tracing::debug;

/// Errors raised while turning a source document into transaction records
///
/// Queries never produce errors; this is the only failure surface of the
/// crate and it is confined to construction time.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// The source document is not a JSON array of records
    #[error("transaction source is not a JSON array: {source}")]
    InvalidDocument {
        #[source]
        source: serde_json::Error,
    },

    /// A record is missing a required field or has a mismatched type
    #[error("invalid transaction record at index {index}: {source}")]
    InvalidRecord {
        /// Zero-based position of the offending record in the source array
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a JSON document into an ordered sequence of transaction records
///
/// Fails fast on the first malformed record (missing required field, null
/// where a value is required, non-numeric amount), reporting its index.
///
/// # Example
/// ```
/// use transaction_analytics_core_rs::ingest::transactions_from_json;
///
/// let txs = transactions_from_json(
///     r#"[{
///         "mtn": 663458,
///         "amount": 430.2,
///         "senderFullName": "Tom Shelby",
///         "senderAge": 22,
///         "beneficiaryFullName": "Alfie Solomons",
///         "beneficiaryAge": 33,
///         "issueId": 1,
///         "issueSolved": false,
///         "issueMessage": "Looks like money laundering"
///     }]"#,
/// )
/// .unwrap();
///
/// assert_eq!(txs.len(), 1);
/// assert_eq!(txs[0].sender_full_name(), "Tom Shelby");
/// ```
pub fn transactions_from_json(json: &str) -> Result<Vec<Transaction>, IngestionError> {
    // An absent source is represented upstream as an empty document.
    if json.trim().is_empty() {
        debug!("empty transaction source, ingesting zero records");
        return Ok(Vec::new());
    }

    let raw: Vec<serde_json::Value> =
        serde_json::from_str(json).map_err(|source| IngestionError::InvalidDocument { source })?;

    let mut transactions = Vec::with_capacity(raw.len());
    for (index, value) in raw.into_iter().enumerate() {
        let tx: Transaction = serde_json::from_value(value)
            .map_err(|source| IngestionError::InvalidRecord { index, source })?;
        transactions.push(tx);
    }

    debug!(
        records = transactions.len(),
        with_issue = transactions.iter().filter(|t| t.has_issue()).count(),
        "ingested transaction records"
    );

    Ok(transactions)
}
