//! Tests for the ingestion boundary
//!
//! Ingestion either fully succeeds or fully aborts: the first malformed
//! record kills engine construction with a descriptive error, and nothing
//! partially constructed leaks into the query layer.

use transaction_analytics_core_rs::{
    transactions_from_json, IngestionError, TransactionQueryEngine,
};

/// Reference record sequence in the upstream wire format
const REFERENCE_JSON: &str = r#"[
  {
    "mtn": 663458,
    "amount": 430.2,
    "senderFullName": "Tom Shelby",
    "senderAge": 22,
    "beneficiaryFullName": "Alfie Solomons",
    "beneficiaryAge": 33,
    "issueId": 1,
    "issueSolved": false,
    "issueMessage": "Looks like money laundering"
  },
  {
    "mtn": 1284564,
    "amount": 150.2,
    "senderFullName": "Tom Shelby",
    "senderAge": 22,
    "beneficiaryFullName": "Arthur Shelby",
    "beneficiaryAge": 60,
    "issueId": 2,
    "issueSolved": true,
    "issueMessage": "Never gonna give you up"
  }
]"#;

#[test]
fn test_ingest_reference_document() {
    let txs = transactions_from_json(REFERENCE_JSON).unwrap();

    assert_eq!(txs.len(), 2);
    assert_eq!(txs[0].transaction_id(), 663458);
    assert_eq!(txs[0].beneficiary_full_name(), "Alfie Solomons");
    assert_eq!(txs[0].issue_id(), Some(1));
    assert!(!txs[0].issue_solved());
    assert_eq!(txs[1].transaction_id(), 1284564);
    assert_eq!(txs[1].issue_message(), Some("Never gonna give you up"));
}

#[test]
fn test_ingest_preserves_record_order() {
    let txs = transactions_from_json(REFERENCE_JSON).unwrap();
    let ids: Vec<u64> = txs.iter().map(|tx| tx.transaction_id()).collect();
    assert_eq!(ids, vec![663458, 1284564]);
}

#[test]
fn test_empty_source_yields_zero_records() {
    assert!(transactions_from_json("").unwrap().is_empty());
    assert!(transactions_from_json("   \n\t ").unwrap().is_empty());
    assert!(transactions_from_json("[]").unwrap().is_empty());
}

#[test]
fn test_engine_from_json() {
    let engine = TransactionQueryEngine::from_json(REFERENCE_JSON).unwrap();
    assert_eq!(engine.len(), 2);

    let empty = TransactionQueryEngine::from_json("").unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_non_array_document_is_rejected() {
    let err = transactions_from_json(r#"{"mtn": 1}"#).unwrap_err();
    assert!(matches!(err, IngestionError::InvalidDocument { .. }));
}

#[test]
fn test_missing_required_field_fails_with_index() {
    // senderFullName is absent from the only record
    let json = r#"[
      {
        "mtn": 1,
        "amount": 10.0,
        "senderAge": 30,
        "beneficiaryFullName": "B",
        "beneficiaryAge": 40,
        "issueSolved": true
      }
    ]"#;

    let err = transactions_from_json(json).unwrap_err();
    match err {
        IngestionError::InvalidRecord { index, .. } => assert_eq!(index, 0),
        other => panic!("expected InvalidRecord, got {other:?}"),
    }
}

#[test]
fn test_error_reports_offending_record_position() {
    // First record is well-formed; the second has a null sender name
    let json = r#"[
      {
        "mtn": 1,
        "amount": 10.0,
        "senderFullName": "A",
        "senderAge": 30,
        "beneficiaryFullName": "B",
        "beneficiaryAge": 40,
        "issueSolved": true
      },
      {
        "mtn": 2,
        "amount": 20.0,
        "senderFullName": null,
        "senderAge": 30,
        "beneficiaryFullName": "B",
        "beneficiaryAge": 40,
        "issueSolved": true
      }
    ]"#;

    let err = transactions_from_json(json).unwrap_err();
    match &err {
        IngestionError::InvalidRecord { index, .. } => assert_eq!(*index, 1),
        other => panic!("expected InvalidRecord, got {other:?}"),
    }
    assert!(err.to_string().contains("index 1"));
}

#[test]
fn test_non_numeric_amount_is_rejected() {
    let json = r#"[
      {
        "mtn": 1,
        "amount": "lots",
        "senderFullName": "A",
        "senderAge": 30,
        "beneficiaryFullName": "B",
        "beneficiaryAge": 40,
        "issueSolved": true
      }
    ]"#;

    let err = transactions_from_json(json).unwrap_err();
    assert!(matches!(err, IngestionError::InvalidRecord { index: 0, .. }));
}

#[test]
fn test_missing_issue_solved_is_rejected() {
    // The upstream format always carries issueSolved
    let json = r#"[
      {
        "mtn": 1,
        "amount": 10.0,
        "senderFullName": "A",
        "senderAge": 30,
        "beneficiaryFullName": "B",
        "beneficiaryAge": 40
      }
    ]"#;

    let err = transactions_from_json(json).unwrap_err();
    assert!(matches!(err, IngestionError::InvalidRecord { index: 0, .. }));
}

#[test]
fn test_absent_issue_annotation_keys_are_allowed() {
    // issueId and issueMessage may be missing entirely, not just null
    let json = r#"[
      {
        "mtn": 1,
        "amount": 10.0,
        "senderFullName": "A",
        "senderAge": 30,
        "beneficiaryFullName": "B",
        "beneficiaryAge": 40,
        "issueSolved": true
      }
    ]"#;

    let txs = transactions_from_json(json).unwrap();
    assert_eq!(txs[0].issue_id(), None);
    assert_eq!(txs[0].issue_message(), None);
}
