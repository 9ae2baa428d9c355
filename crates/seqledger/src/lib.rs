//! # Seqledger
//!
//! Tamper-evident record-keeping for DNA sequence analysis results.
//!
//! A raw sequence goes through a pipeline of independent analyses
//! (complement, reverse complement, transcription, translation, GC content,
//! base counts); the aggregated result is appended as an immutable,
//! hash-linked record to an append-only in-memory chain. Any later mutation
//! of a recorded payload is detectable by re-validating the chain.
//!
//! This is a single-process integrity log, not a distributed blockchain:
//! no consensus, no proof-of-work, no persistence across restarts.
//!
//! ## Usage
//!
//! ```rust
//! use std::collections::HashMap;
//! use std::sync::Arc;
//! use seqledger::{CodonTable, Ledger, LedgerConfig, Pipeline};
//!
//! let table = Arc::new(CodonTable::from_map(HashMap::from([
//!     ("ATG".to_string(), "M".to_string()),
//!     ("TAA".to_string(), "Stop".to_string()),
//! ])));
//! let ledger = Ledger::new(Pipeline::standard(table), LedgerConfig::default());
//!
//! let hash = ledger.record("ATGCATGC").unwrap();
//! assert!(ledger.is_valid());
//!
//! for view in ledger.snapshot() {
//!     println!("#{} {} {}", view.index, view.hash, view.timestamp);
//! }
//! # let _ = hash;
//! ```
//!
//! ## Re-exports
//!
//! The component crates are re-exported for convenience:
//!
//! - `seqledger::core` - chain primitives ([`Chain`], [`Record`], [`Digest`])
//! - `seqledger::analysis` - the sequence domain ([`Pipeline`], transforms)

pub mod error;
pub mod ledger;

// Re-export component crates
pub use seqledger_analysis as analysis;
pub use seqledger_core as core;

// Re-export main types for convenience
pub use error::{LedgerError, Result};
pub use ledger::{now_millis, Ledger, LedgerConfig, RecordView};

// Re-export commonly used component types
pub use seqledger_analysis::{
    AnalysisReport, CodonTable, Pipeline, Sequence, Transform, TransformOutput,
};
pub use seqledger_core::{Chain, ChainFault, Digest, Record};
