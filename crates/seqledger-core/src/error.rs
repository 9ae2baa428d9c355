//! Error types for chain verification.

use thiserror::Error;

use crate::crypto::Digest;

/// Faults uncovered while verifying a chain or vetting a candidate record.
///
/// A fault is terminal information: there is no in-place repair, the caller
/// decides what to do with a broken chain.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainFault {
    #[error("record {index}: stored hash does not match recomputed digest")]
    HashMismatch { index: u64 },

    #[error("record {index}: previous_hash does not match predecessor (expected {expected}, got {got})")]
    BrokenLink {
        index: u64,
        expected: Digest,
        got: Digest,
    },

    #[error("genesis record does not carry the zero predecessor marker")]
    BadGenesisMarker,

    #[error("record index {got} does not extend chain of length {chain_len}")]
    IndexMismatch { chain_len: u64, got: u64 },
}
