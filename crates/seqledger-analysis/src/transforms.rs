//! The transform family: pure, stateless conversions over one sequence.
//!
//! Each transform is a strategy behind the [`Transform`] trait; the pipeline
//! holds a list of them and never branches on names. All of them borrow the
//! input immutably, so independent invocations are safe to run in parallel.

use std::sync::Arc;

use crate::codon::{AminoAcid, CodonTable};
use crate::error::TransformError;
use crate::report::{BaseCounts, TransformOutput};
use crate::sequence::{Base, Sequence};

/// A single analysis capability: one sequence in, one derived value out.
///
/// The built-in transforms are total over validated sequences; the `Result`
/// is the seam for external implementations that can fail. A failing
/// transform aborts the whole pipeline run.
pub trait Transform: Send + Sync {
    fn apply(&self, seq: &Sequence) -> Result<TransformOutput, TransformError>;
}

/// Per-symbol Watson-Crick complement: A↔T, C↔G.
pub struct Complement;

impl Transform for Complement {
    fn apply(&self, seq: &Sequence) -> Result<TransformOutput, TransformError> {
        let out: String = seq.bases().iter().map(|b| b.complement().symbol()).collect();
        Ok(TransformOutput::Sequence(out))
    }
}

/// Complement of the input taken in reverse order.
pub struct ReverseComplement;

impl Transform for ReverseComplement {
    fn apply(&self, seq: &Sequence) -> Result<TransformOutput, TransformError> {
        let out: String = seq
            .bases()
            .iter()
            .rev()
            .map(|b| b.complement().symbol())
            .collect();
        Ok(TransformOutput::Sequence(out))
    }
}

/// DNA to RNA: every T becomes U, everything else passes through.
pub struct Transcription;

impl Transform for Transcription {
    fn apply(&self, seq: &Sequence) -> Result<TransformOutput, TransformError> {
        let out: String = seq
            .bases()
            .iter()
            .map(|b| match b {
                Base::T => 'U',
                other => other.symbol(),
            })
            .collect();
        Ok(TransformOutput::Sequence(out))
    }
}

/// Codon-by-codon translation against a shared table.
///
/// Reads non-overlapping triplets from offset 0 and discards a trailing
/// partial triplet. A stop codon halts translation immediately; a codon
/// the table has no entry for contributes nothing and translation goes on.
pub struct Translation {
    table: Arc<CodonTable>,
}

impl Translation {
    pub fn new(table: Arc<CodonTable>) -> Self {
        Self { table }
    }
}

impl Transform for Translation {
    fn apply(&self, seq: &Sequence) -> Result<TransformOutput, TransformError> {
        let mut protein = String::new();
        for codon in seq.codons() {
            match self.table.get(codon) {
                Some(AminoAcid::Stop) => break,
                Some(AminoAcid::Residue(symbol)) => protein.push_str(symbol),
                None => {}
            }
        }
        Ok(TransformOutput::Sequence(protein))
    }
}

/// Percentage of G and C symbols: `100 * (G + C) / len`.
///
/// The empty sequence yields `0.0` rather than an error; it carries zero
/// G/C content by any reading.
pub struct GcContent;

impl Transform for GcContent {
    fn apply(&self, seq: &Sequence) -> Result<TransformOutput, TransformError> {
        if seq.is_empty() {
            return Ok(TransformOutput::Percentage(0.0));
        }
        let gc = seq
            .bases()
            .iter()
            .filter(|b| matches!(b, Base::G | Base::C))
            .count();
        Ok(TransformOutput::Percentage(
            100.0 * gc as f64 / seq.len() as f64,
        ))
    }
}

/// Occurrence count of each of A, T, G, C.
pub struct BaseCount;

impl Transform for BaseCount {
    fn apply(&self, seq: &Sequence) -> Result<TransformOutput, TransformError> {
        let mut counts = BaseCounts::default();
        for base in seq.bases() {
            match base {
                Base::A => counts.a += 1,
                Base::T => counts.t += 1,
                Base::G => counts.g += 1,
                Base::C => counts.c += 1,
            }
        }
        Ok(TransformOutput::Counts(counts))
    }
}
