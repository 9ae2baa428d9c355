//! The Ledger: unified API over the analysis pipeline and the hash chain.
//!
//! The ledger owns the control flow the components stay ignorant of:
//! alphabet validation before any transform runs, timestamping, deriving
//! index and predecessor link from the current tip, and the append policy.

use std::sync::RwLock;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use tracing::debug;

use seqledger_analysis::{Pipeline, Sequence};
use seqledger_core::{Chain, ChainFault, Digest, Payload, Record};

use crate::error::{LedgerError, Result};

/// Current time in Unix milliseconds.
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Configuration for the ledger.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Whether to vet caller-supplied records against the current tip
    /// before accepting them.
    ///
    /// Off by default: appends are trusted and a misconstructed record is
    /// only discovered by a later [`Ledger::verify`] pass.
    pub validate_on_append: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            validate_on_append: false,
        }
    }
}

/// A read-only view of one record for the display boundary.
#[derive(Debug, Clone, Serialize)]
pub struct RecordView {
    pub index: u64,
    pub timestamp: i64,
    pub payload: Payload,
    /// Hex rendering of the predecessor link.
    pub previous_hash: String,
    /// Hex rendering of the record's digest.
    pub hash: String,
}

impl From<&Record> for RecordView {
    fn from(record: &Record) -> Self {
        Self {
            index: record.index,
            timestamp: record.timestamp,
            payload: record.payload.clone(),
            previous_hash: record.previous_hash.to_hex(),
            hash: record.hash.to_hex(),
        }
    }
}

/// The main ledger struct: one pipeline, one chain.
///
/// The chain sits behind an `RwLock`: appends are serialized through the
/// write lock, and validation never runs concurrently with an in-progress
/// append.
pub struct Ledger {
    pipeline: Pipeline,
    chain: RwLock<Chain>,
    config: LedgerConfig,
}

impl Ledger {
    /// Create a ledger with a freshly initialized chain (genesis only).
    pub fn new(pipeline: Pipeline, config: LedgerConfig) -> Self {
        Self {
            pipeline,
            chain: RwLock::new(Chain::new(now_millis())),
            config,
        }
    }

    /// Analyze a raw sequence and append the aggregated result.
    ///
    /// Validates the alphabet first (an invalid symbol rejects the input
    /// with no partial processing), runs every registered transform, and
    /// appends one record carrying the full report. Returns the new
    /// record's digest.
    pub fn record(&self, raw: &str) -> Result<Digest> {
        let seq = Sequence::parse(raw)?;
        let report = self.pipeline.run(&seq)?;
        let payload = report.to_payload();

        let mut chain = self.chain.write().expect("chain lock poisoned");
        let record = Record::new(
            chain.len() as u64,
            now_millis(),
            payload,
            chain.tip().hash,
        );
        let hash = record.hash;
        chain.append(record);
        debug!(index = chain.len() as u64 - 1, hash = %hash, "recorded analysis");
        Ok(hash)
    }

    /// Append a caller-constructed record, subject to the configured policy.
    ///
    /// With `validate_on_append` set, a record that does not extend the
    /// current tip is rejected synchronously; otherwise it is accepted
    /// as-is and any misconstruction surfaces via [`Ledger::verify`].
    pub fn append_record(&self, record: Record) -> Result<Digest> {
        let mut chain = self.chain.write().expect("chain lock poisoned");
        if self.config.validate_on_append {
            chain.check_extends(&record).map_err(LedgerError::from)?;
        }
        let hash = record.hash;
        chain.append(record);
        Ok(hash)
    }

    /// Whole-chain verification, failing on the first bad record.
    pub fn verify(&self) -> std::result::Result<(), ChainFault> {
        self.chain.read().expect("chain lock poisoned").verify()
    }

    /// Chain-wide validity as a boolean. Tampering is an answer, not an
    /// error.
    pub fn is_valid(&self) -> bool {
        self.verify().is_ok()
    }

    /// Number of records, genesis included.
    pub fn len(&self) -> usize {
        self.chain.read().expect("chain lock poisoned").len()
    }

    /// A ledger always holds at least its genesis record.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The digest of the most recent record.
    pub fn tip_hash(&self) -> Digest {
        self.chain.read().expect("chain lock poisoned").tip().hash
    }

    /// Read-only views of every record, for rendering.
    pub fn snapshot(&self) -> Vec<RecordView> {
        self.chain
            .read()
            .expect("chain lock poisoned")
            .records()
            .iter()
            .map(RecordView::from)
            .collect()
    }

    /// Run a closure against the chain under the write lock.
    ///
    /// The escape hatch for tamper simulation in tests; ordinary callers
    /// never need it.
    pub fn with_chain_mut<T>(&self, f: impl FnOnce(&mut Chain) -> T) -> T {
        let mut chain = self.chain.write().expect("chain lock poisoned");
        f(&mut chain)
    }
}
