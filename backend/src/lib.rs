//! Transaction Analytics Core - Rust Engine
//!
//! In-memory reporting layer over a static dataset of financial transaction
//! records, loaded once at construction time.
//!
//! # Architecture
//!
//! - **models**: Domain types (Transaction)
//! - **ingest**: Ingestion boundary (JSON record sequence → records)
//! - **query**: The query engine (sums, maxima, uniqueness counts,
//!   issue-status lookups, top-N ranking, per-beneficiary grouping)
//!
//! # Critical Invariants
//!
//! 1. Records are immutable after load; queries never mutate engine state
//! 2. Ingestion fails fast on malformed records; queries never fail
//! 3. Clients are identified by full-name string equality (known upstream
//!    limitation, preserved deliberately)

// Module declarations
pub mod ingest;
pub mod models;
pub mod query;

// Re-exports for convenience
pub use ingest::{transactions_from_json, IngestionError};
pub use models::Transaction;
pub use query::TransactionQueryEngine;
