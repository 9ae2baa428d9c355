//! # Seqledger Analysis
//!
//! The DNA sequence domain: a validated [`Sequence`] type, a family of
//! pluggable [`Transform`]s, and the [`Pipeline`] that runs them all over
//! one input and assembles an [`AnalysisReport`].
//!
//! Alphabet validation happens once, at the [`Sequence`] boundary. Every
//! transform takes a `&Sequence` and can therefore assume symbols are drawn
//! from {A, C, G, T}.

pub mod codon;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod sequence;
pub mod transforms;

pub use codon::{AminoAcid, CodonTable};
pub use error::{AnalysisError, TransformError};
pub use pipeline::Pipeline;
pub use report::{AnalysisReport, BaseCounts, TransformOutput};
pub use sequence::{Base, Sequence};
pub use transforms::{
    BaseCount, Complement, GcContent, ReverseComplement, Transcription, Transform, Translation,
};
