//! Error types for the analysis domain.

use thiserror::Error;

/// Errors raised at the analysis boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// The raw input carried a symbol outside {A, C, G, T}. Rejected before
    /// any transform runs.
    #[error("invalid symbol '{symbol}' at position {position}: expected one of A, C, G, T")]
    InvalidSymbol { symbol: char, position: usize },

    /// A transform failed; the whole pipeline run is abandoned.
    #[error("transform '{label}' failed: {source}")]
    Transform {
        label: String,
        source: TransformError,
    },
}

/// Errors an individual transform may raise.
///
/// The built-in transforms are total over validated sequences and never
/// return these; the variants exist for external [`Transform`]
/// implementations plugged into a pipeline.
///
/// [`Transform`]: crate::transforms::Transform
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("sequence not supported: {0}")]
    Unsupported(String),

    #[error("{0}")]
    Other(String),
}
