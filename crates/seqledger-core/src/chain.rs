//! Chain: an ordered, append-only sequence of hash-linked records.
//!
//! A chain is created with exactly one genesis record, grows only through
//! [`Chain::append`], and never shrinks or reorders. Append is permissive:
//! it trusts the caller to have linked the record against the current tip,
//! and misconstruction surfaces later through [`Chain::verify`]. Callers
//! wanting synchronous rejection run [`Chain::check_extends`] first.

use serde::{Deserialize, Serialize};

use crate::crypto::Digest;
use crate::error::ChainFault;
use crate::record::Record;

/// An append-only log of hash-linked records, index 0 = genesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chain {
    records: Vec<Record>,
}

impl Chain {
    /// Create a chain containing exactly one genesis record stamped with
    /// the given creation time.
    pub fn new(timestamp: i64) -> Self {
        Self {
            records: vec![Record::genesis(timestamp)],
        }
    }

    /// The genesis record.
    pub fn genesis(&self) -> &Record {
        &self.records[0]
    }

    /// The most recently appended record.
    pub fn tip(&self) -> &Record {
        self.records.last().expect("chain always has genesis")
    }

    /// Number of records, genesis included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// A chain always holds at least its genesis record.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The record at position `index`, if present.
    pub fn get(&self, index: u64) -> Option<&Record> {
        self.records.get(index as usize)
    }

    /// All records in chain order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Mutable access to a record, for tamper simulation.
    ///
    /// Deliberately does not touch the stored hash; that divergence is what
    /// [`Chain::verify`] exists to catch.
    pub fn get_mut(&mut self, index: u64) -> Option<&mut Record> {
        self.records.get_mut(index as usize)
    }

    /// Append a record as the new tip.
    ///
    /// Permissive by design: the record's `index` and `previous_hash` are
    /// not checked here. A wrongly constructed record is accepted and only
    /// discovered by a later [`Chain::verify`] pass.
    pub fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Check that a candidate record correctly extends the current tip.
    ///
    /// The hardened precondition for [`Chain::append`]: index continuity,
    /// tip linkage, and internal hash consistency.
    pub fn check_extends(&self, record: &Record) -> Result<(), ChainFault> {
        let expected_index = self.records.len() as u64;
        if record.index != expected_index {
            return Err(ChainFault::IndexMismatch {
                chain_len: expected_index,
                got: record.index,
            });
        }
        if record.previous_hash != self.tip().hash {
            return Err(ChainFault::BrokenLink {
                index: record.index,
                expected: self.tip().hash,
                got: record.previous_hash,
            });
        }
        if record.hash != record.compute_hash() {
            return Err(ChainFault::HashMismatch {
                index: record.index,
            });
        }
        Ok(())
    }

    /// Verify the whole chain, failing on the first bad record.
    ///
    /// Genesis must carry the zero marker and a self-consistent hash. Every
    /// subsequent record must (a) hash to its stored digest when recomputed
    /// over its current fields, and (b) link to its predecessor's stored
    /// hash. Idempotent: repeated calls give the same answer absent further
    /// mutation.
    pub fn verify(&self) -> Result<(), ChainFault> {
        let genesis = self.genesis();
        if genesis.previous_hash != Digest::ZERO {
            return Err(ChainFault::BadGenesisMarker);
        }
        if genesis.hash != genesis.compute_hash() {
            return Err(ChainFault::HashMismatch { index: 0 });
        }

        for i in 1..self.records.len() {
            let record = &self.records[i];
            if record.hash != record.compute_hash() {
                return Err(ChainFault::HashMismatch {
                    index: i as u64,
                });
            }
            let predecessor = &self.records[i - 1];
            if record.previous_hash != predecessor.hash {
                return Err(ChainFault::BrokenLink {
                    index: i as u64,
                    expected: predecessor.hash,
                    got: record.previous_hash,
                });
            }
        }
        Ok(())
    }

    /// Whole-chain validity as a boolean.
    pub fn is_valid(&self) -> bool {
        self.verify().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ciborium::value::Value;

    fn extend(chain: &mut Chain, timestamp: i64, payload: Value) {
        let record = Record::new(
            chain.len() as u64,
            timestamp,
            payload,
            chain.tip().hash,
        );
        chain.append(record);
    }

    #[test]
    fn test_fresh_chain_is_valid() {
        let chain = Chain::new(1736870400000);
        assert_eq!(chain.len(), 1);
        assert!(chain.is_valid());
    }

    #[test]
    fn test_correctly_appended_records_keep_chain_valid() {
        let mut chain = Chain::new(1000);
        extend(&mut chain, 1001, Value::Text("first".into()));
        extend(&mut chain, 1002, Value::Text("second".into()));
        extend(&mut chain, 1003, Value::Text("third".into()));

        assert_eq!(chain.len(), 4);
        assert!(chain.is_valid());
    }

    #[test]
    fn test_payload_tamper_detected() {
        let mut chain = Chain::new(1000);
        extend(&mut chain, 1001, Value::Text("honest".into()));

        chain.get_mut(1).unwrap().payload = Value::Text("tampered".into());

        assert_eq!(chain.verify(), Err(ChainFault::HashMismatch { index: 1 }));
        assert!(!chain.is_valid());
    }

    #[test]
    fn test_timestamp_tamper_detected() {
        let mut chain = Chain::new(1000);
        extend(&mut chain, 1001, Value::Text("honest".into()));

        chain.get_mut(1).unwrap().timestamp = 9999;

        assert_eq!(chain.verify(), Err(ChainFault::HashMismatch { index: 1 }));
    }

    #[test]
    fn test_broken_link_detected() {
        let mut chain = Chain::new(1000);
        extend(&mut chain, 1001, Value::Text("first".into()));
        extend(&mut chain, 1002, Value::Text("second".into()));

        // Rewrite record 2's link and refresh its hash so only the linkage
        // check can catch it.
        let bogus = Digest::hash(b"someone else's tip");
        let record = chain.get_mut(2).unwrap();
        record.previous_hash = bogus;
        record.hash = record.compute_hash();

        match chain.verify() {
            Err(ChainFault::BrokenLink { index: 2, got, .. }) => assert_eq!(got, bogus),
            other => panic!("expected broken link at 2, got {:?}", other),
        }
    }

    #[test]
    fn test_middle_record_tamper_detected() {
        let mut chain = Chain::new(1000);
        for i in 0..4 {
            extend(&mut chain, 1001 + i, Value::Integer(i.into()));
        }

        chain.get_mut(2).unwrap().payload = Value::Text("rewritten".into());

        assert_eq!(chain.verify(), Err(ChainFault::HashMismatch { index: 2 }));
    }

    #[test]
    fn test_genesis_tamper_detected() {
        let mut chain = Chain::new(1000);
        chain.get_mut(0).unwrap().payload = Value::Text("not genesis".into());
        assert_eq!(chain.verify(), Err(ChainFault::HashMismatch { index: 0 }));
    }

    #[test]
    fn test_verify_is_idempotent() {
        let mut chain = Chain::new(1000);
        extend(&mut chain, 1001, Value::Text("data".into()));
        chain.get_mut(1).unwrap().payload = Value::Null;

        let first = chain.verify();
        let second = chain.verify();
        assert_eq!(first, second);
    }

    #[test]
    fn test_append_is_permissive() {
        let mut chain = Chain::new(1000);
        // Wrong index, wrong link: append takes it anyway.
        let stray = Record::new(7, 1001, Value::Text("stray".into()), Digest::hash(b"bogus"));
        chain.append(stray);

        assert_eq!(chain.len(), 2);
        // The misconstruction surfaces via verify, not append.
        assert!(!chain.is_valid());
    }

    #[test]
    fn test_check_extends_accepts_correct_record() {
        let chain = Chain::new(1000);
        let record = Record::new(1, 1001, Value::Text("ok".into()), chain.tip().hash);
        assert!(chain.check_extends(&record).is_ok());
    }

    #[test]
    fn test_check_extends_rejects_wrong_index() {
        let chain = Chain::new(1000);
        let record = Record::new(5, 1001, Value::Text("ok".into()), chain.tip().hash);
        assert_eq!(
            chain.check_extends(&record),
            Err(ChainFault::IndexMismatch {
                chain_len: 1,
                got: 5
            })
        );
    }

    #[test]
    fn test_check_extends_rejects_wrong_link() {
        let chain = Chain::new(1000);
        let record = Record::new(1, 1001, Value::Text("ok".into()), Digest::hash(b"not the tip"));
        assert!(matches!(
            chain.check_extends(&record),
            Err(ChainFault::BrokenLink { index: 1, .. })
        ));
    }

    #[test]
    fn test_check_extends_rejects_inconsistent_hash() {
        let chain = Chain::new(1000);
        let mut record = Record::new(1, 1001, Value::Text("ok".into()), chain.tip().hash);
        record.payload = Value::Text("swapped after hashing".into());
        assert_eq!(
            chain.check_extends(&record),
            Err(ChainFault::HashMismatch { index: 1 })
        );
    }
}
