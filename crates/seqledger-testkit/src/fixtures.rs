//! Test fixtures and helpers.
//!
//! Common setup code for scenario tests across the workspace.

use std::collections::HashMap;
use std::sync::Arc;

use seqledger::{now_millis, Ledger, LedgerConfig};
use seqledger_analysis::{CodonTable, Pipeline};
use seqledger_core::{Chain, Digest, Payload, Record};

/// A test fixture with a shared codon table.
pub struct TestFixture {
    pub table: Arc<CodonTable>,
}

impl TestFixture {
    /// Create a fixture with the standard mini codon table (start, two
    /// residues, all three stop codons).
    pub fn new() -> Self {
        Self {
            table: Arc::new(CodonTable::from_map(HashMap::from([
                ("ATG".to_string(), "M".to_string()),
                ("GCC".to_string(), "A".to_string()),
                ("CAT".to_string(), "H".to_string()),
                ("TAA".to_string(), "Stop".to_string()),
                ("TAG".to_string(), "Stop".to_string()),
                ("TGA".to_string(), "Stop".to_string()),
            ]))),
        }
    }

    /// Create a fixture with an empty codon table.
    pub fn without_table() -> Self {
        Self {
            table: Arc::new(CodonTable::empty()),
        }
    }

    /// The standard pipeline over this fixture's table.
    pub fn pipeline(&self) -> Pipeline {
        Pipeline::standard(Arc::clone(&self.table))
    }

    /// A ledger with the standard pipeline and default (permissive) config.
    pub fn ledger(&self) -> Ledger {
        Ledger::new(self.pipeline(), LedgerConfig::default())
    }

    /// A ledger with the strict append policy turned on.
    pub fn strict_ledger(&self) -> Ledger {
        Ledger::new(
            self.pipeline(),
            LedgerConfig {
                validate_on_append: true,
            },
        )
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a chain with `count` correctly linked records after genesis.
pub fn chain_of(count: usize) -> Chain {
    let mut chain = Chain::new(now_millis());
    for i in 0..count {
        let record = Record::new(
            chain.len() as u64,
            now_millis(),
            Payload::Text(format!("entry {}", i)),
            chain.tip().hash,
        );
        chain.append(record);
    }
    chain
}

/// Overwrite a record's payload in place, without refreshing its hash.
pub fn tamper_payload(chain: &mut Chain, index: u64, payload: Payload) {
    chain
        .get_mut(index)
        .unwrap_or_else(|| panic!("no record at {}", index))
        .payload = payload;
}

/// Rewire a record's predecessor link and refresh its stored hash, so only
/// the linkage check can detect the break.
pub fn tamper_link(chain: &mut Chain, index: u64, previous_hash: Digest) {
    let record = chain
        .get_mut(index)
        .unwrap_or_else(|| panic!("no record at {}", index));
    record.previous_hash = previous_hash;
    record.hash = record.compute_hash();
}
