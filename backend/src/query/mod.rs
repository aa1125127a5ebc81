//! Query layer - read-only analytics over the stored record sequence
//!
//! See `engine.rs` for the full implementation.

pub mod engine;

// Re-export main type for convenience
pub use engine::TransactionQueryEngine;
