//! Transform outputs and the assembled analysis report.

use ciborium::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-base occurrence counts over the canonical alphabet.
///
/// Symbols outside {A, T, G, C} cannot occur in a validated sequence, so
/// only these four are tracked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseCounts {
    #[serde(rename = "A")]
    pub a: u64,
    #[serde(rename = "T")]
    pub t: u64,
    #[serde(rename = "G")]
    pub g: u64,
    #[serde(rename = "C")]
    pub c: u64,
}

impl BaseCounts {
    /// Sum over all four bases. Equals the sequence length.
    pub fn total(&self) -> u64 {
        self.a + self.t + self.g + self.c
    }
}

/// The result of one transform: a derived sequence, a percentage, or a
/// per-symbol count mapping.
///
/// Serializes untagged so report payloads carry plain strings, numbers,
/// and maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransformOutput {
    Sequence(String),
    Percentage(f64),
    Counts(BaseCounts),
}

impl TransformOutput {
    pub fn as_sequence(&self) -> Option<&str> {
        match self {
            Self::Sequence(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_percentage(&self) -> Option<f64> {
        match self {
            Self::Percentage(p) => Some(*p),
            _ => None,
        }
    }

    pub fn as_counts(&self) -> Option<&BaseCounts> {
        match self {
            Self::Counts(c) => Some(c),
            _ => None,
        }
    }
}

/// One pipeline run's outputs, keyed by analysis label.
///
/// Backed by a BTreeMap so iteration order is deterministic; logically the
/// insertion order is irrelevant and canonical payload encoding does not
/// depend on it either.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport(pub BTreeMap<String, TransformOutput>);

impl AnalysisReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, output: TransformOutput) {
        self.0.insert(label.into(), output);
    }

    pub fn get(&self, label: &str) -> Option<&TransformOutput> {
        self.0.get(label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert the report into a structured record payload.
    pub fn to_payload(&self) -> Value {
        Value::serialized(self).expect("report contains only CBOR-representable values")
    }
}
