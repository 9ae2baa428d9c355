//! Record: a single hash-linked entry in the chain.
//!
//! A record's `hash` is computed over its other four fields at construction
//! time and is never settable from outside. The fields themselves stay
//! public and mutable: a mutated payload silently diverges from the stored
//! hash, which is exactly what [`Chain::verify`](crate::chain::Chain::verify)
//! detects afterwards.

use ciborium::value::Value;
use serde::{Deserialize, Serialize};

use crate::canonical::hash_preimage;
use crate::crypto::Digest;

/// Record payloads are arbitrary structured data.
///
/// Producers build these from typed reports via serde; the core crate only
/// needs them to canonicalize deterministically.
pub type Payload = Value;

/// The sentinel payload carried by every genesis record.
pub const GENESIS_SENTINEL: &str = "genesis";

/// Build the genesis sentinel payload.
pub fn genesis_payload() -> Payload {
    Value::Text(GENESIS_SENTINEL.to_string())
}

/// A single entry in the chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Position in the chain, starting at 0 for genesis.
    pub index: u64,

    /// Creation time (Unix milliseconds). Claimed, not enforced.
    pub timestamp: i64,

    /// The recorded data.
    pub payload: Payload,

    /// Hash of the immediately preceding record, or [`Digest::ZERO`] on
    /// genesis.
    pub previous_hash: Digest,

    /// Digest over (index, timestamp, payload, previous_hash), fixed at
    /// construction.
    pub hash: Digest,
}

impl Record {
    /// Create a record, computing its hash from the other four fields.
    pub fn new(index: u64, timestamp: i64, payload: Payload, previous_hash: Digest) -> Self {
        let hash = Digest::hash(&hash_preimage(index, timestamp, &payload, &previous_hash));
        Self {
            index,
            timestamp,
            payload,
            previous_hash,
            hash,
        }
    }

    /// Create the genesis record: index 0, sentinel payload, zero marker.
    pub fn genesis(timestamp: i64) -> Self {
        Self::new(0, timestamp, genesis_payload(), Digest::ZERO)
    }

    /// Recompute the digest from the record's current field values.
    ///
    /// Matches the stored [`hash`](Record::hash) only while the record is
    /// untampered.
    pub fn compute_hash(&self) -> Digest {
        Digest::hash(&hash_preimage(
            self.index,
            self.timestamp,
            &self.payload,
            &self.previous_hash,
        ))
    }

    /// Check if this is a genesis record (index 0, zero marker).
    pub fn is_genesis(&self) -> bool {
        self.index == 0 && self.previous_hash == Digest::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hash_fixed_at_construction() {
        let record = Record::new(1, 1736870400000, Value::Text("data".into()), Digest::ZERO);
        assert_eq!(record.hash, record.compute_hash());
    }

    #[test]
    fn test_hash_deterministic() {
        let a = Record::new(2, 5000, Value::Integer(7.into()), Digest::hash(b"prev"));
        let b = Record::new(2, 5000, Value::Integer(7.into()), Digest::hash(b"prev"));
        assert_eq!(a.hash, b.hash);
    }

    #[test]
    fn test_payload_mutation_diverges_from_stored_hash() {
        let mut record = Record::new(1, 1000, Value::Text("original".into()), Digest::ZERO);
        record.payload = Value::Text("tampered".into());
        assert_ne!(record.hash, record.compute_hash());
    }

    #[test]
    fn test_genesis_shape() {
        let genesis = Record::genesis(1736870400000);
        assert_eq!(genesis.index, 0);
        assert_eq!(genesis.payload, genesis_payload());
        assert_eq!(genesis.previous_hash, Digest::ZERO);
        assert!(genesis.is_genesis());
        assert_eq!(genesis.hash, genesis.compute_hash());
    }

    #[test]
    fn test_distinct_timestamps_distinct_hashes() {
        let a = Record::genesis(1000);
        let b = Record::genesis(1001);
        assert_ne!(a.hash, b.hash);
    }

    #[test]
    fn test_record_serde_roundtrip() {
        let record = Record::new(
            3,
            1736870400000,
            Value::Map(vec![(Value::Text("gc_content".into()), Value::Float(25.0))]),
            Digest::hash(b"prev"),
        );
        let json = serde_json::to_string(&record).unwrap();
        let recovered: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(record, recovered);
        assert_eq!(recovered.hash, recovered.compute_hash());
    }

    proptest! {
        #[test]
        fn prop_hash_deterministic(index in 0u64..10_000, ts in 0i64..=i64::MAX / 2, text in "[a-zA-Z0-9 ]{0,64}") {
            let prev = Digest::hash(text.as_bytes());
            let a = Record::new(index, ts, Value::Text(text.clone()), prev);
            let b = Record::new(index, ts, Value::Text(text), prev);
            prop_assert_eq!(a.hash, b.hash);
        }

        #[test]
        fn prop_index_tamper_diverges(index in 1u64..10_000) {
            let mut record = Record::new(index, 1000, Value::Text("data".into()), Digest::ZERO);
            record.index -= 1;
            prop_assert_ne!(record.hash, record.compute_hash());
        }
    }
}
