//! Codon table: the shared lookup from triplets to amino acids.
//!
//! The table is loaded once and injected into every consumer behind an
//! `Arc`; nothing here is a global. A missing or malformed table file
//! degrades to an empty table (every lookup misses, translation produces
//! nothing) rather than failing initialization.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::sequence::Base;

/// The value a codon maps to: a residue symbol, or the stop signal.
///
/// In the table file the stop signal is the literal string `"Stop"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AminoAcid {
    Residue(String),
    Stop,
}

impl AminoAcid {
    fn from_table_entry(entry: String) -> Self {
        if entry == "Stop" {
            Self::Stop
        } else {
            Self::Residue(entry)
        }
    }
}

/// Immutable mapping from 3-symbol codons to amino acids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodonTable {
    entries: HashMap<String, AminoAcid>,
}

impl CodonTable {
    /// An empty table: every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from codon → symbol pairs, where the symbol `"Stop"`
    /// marks a stop codon.
    pub fn from_map(entries: HashMap<String, String>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(codon, entry)| (codon, AminoAcid::from_table_entry(entry)))
                .collect(),
        }
    }

    /// Load a table from a JSON file of codon → symbol pairs.
    ///
    /// A missing file or malformed JSON is logged and degrades to an empty
    /// table; this constructor never fails.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "codon table file not readable, using empty table");
                return Self::empty();
            }
        };
        match serde_json::from_str::<HashMap<String, String>>(&raw) {
            Ok(entries) => Self::from_map(entries),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "codon table is not valid JSON, using empty table");
                Self::empty()
            }
        }
    }

    /// Look up the amino acid for a full codon.
    ///
    /// `None` means the table has no entry; translation treats that as an
    /// empty contribution, never as a stop.
    pub fn get(&self, codon: &[Base]) -> Option<&AminoAcid> {
        debug_assert_eq!(codon.len(), 3);
        let key: String = codon.iter().map(|b| b.symbol()).collect();
        self.entries.get(&key)
    }

    /// Number of codons with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn mini_table() -> CodonTable {
        CodonTable::from_map(HashMap::from([
            ("ATG".to_string(), "M".to_string()),
            ("GCC".to_string(), "A".to_string()),
            ("TAA".to_string(), "Stop".to_string()),
        ]))
    }

    fn codon(s: &str) -> Vec<Base> {
        s.chars().map(|c| Base::from_symbol(c).unwrap()).collect()
    }

    #[test]
    fn test_residue_lookup() {
        let table = mini_table();
        assert_eq!(
            table.get(&codon("ATG")),
            Some(&AminoAcid::Residue("M".to_string()))
        );
    }

    #[test]
    fn test_stop_sentinel_parsed() {
        let table = mini_table();
        assert_eq!(table.get(&codon("TAA")), Some(&AminoAcid::Stop));
    }

    #[test]
    fn test_unknown_codon_misses() {
        let table = mini_table();
        assert_eq!(table.get(&codon("CCC")), None);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"ATG": "M", "TGA": "Stop"}}"#).unwrap();

        let table = CodonTable::load(file.path());
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&codon("TGA")), Some(&AminoAcid::Stop));
    }

    #[test]
    fn test_load_missing_file_degrades_to_empty() {
        let table = CodonTable::load("/nonexistent/codon_table.json");
        assert!(table.is_empty());
    }

    #[test]
    fn test_load_malformed_json_degrades_to_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let table = CodonTable::load(file.path());
        assert!(table.is_empty());
    }
}
