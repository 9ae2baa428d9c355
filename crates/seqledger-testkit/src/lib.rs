//! # Seqledger Testkit
//!
//! Testing utilities for seqledger.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: a ready-made codon table, pipeline, and ledger for test
//!   scenarios, plus tamper helpers
//! - **Generators**: proptest strategies for DNA sequences and chains
//!
//! ## Test Fixtures
//!
//! ```rust
//! use seqledger_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let ledger = fixture.ledger();
//! ledger.record("ATGGCC").unwrap();
//! assert!(ledger.is_valid());
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use seqledger_testkit::generators::dna_string;
//!
//! proptest! {
//!     #[test]
//!     fn records_always_validate(raw in dna_string(0..100)) {
//!         // ...
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::TestFixture;
