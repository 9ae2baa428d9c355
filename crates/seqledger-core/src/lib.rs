//! # Seqledger Core
//!
//! Primitives for a tamper-evident, append-only record chain.
//!
//! This crate contains no I/O, no storage, no domain knowledge about what the
//! recorded payloads mean. It is pure computation over hash-linked records.
//!
//! ## Key Types
//!
//! - [`Record`] - A single hash-linked entry (index, timestamp, payload, links)
//! - [`Chain`] - The append-only sequence of records, starting at genesis
//! - [`Digest`] - 32-byte Blake3 digest
//!
//! ## Canonicalization
//!
//! Record hashes are computed over deterministic CBOR. See [`canonical`].

pub mod canonical;
pub mod chain;
pub mod crypto;
pub mod error;
pub mod record;

pub use canonical::{canonical_value_bytes, hash_preimage};
pub use chain::Chain;
pub use crypto::Digest;
pub use error::ChainFault;
pub use record::{genesis_payload, Payload, Record};
