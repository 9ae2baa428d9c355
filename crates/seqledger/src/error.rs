//! Error types for the ledger facade.

use seqledger_analysis::AnalysisError;
use seqledger_core::ChainFault;
use thiserror::Error;

/// Errors that can occur during ledger operations.
///
/// A failed chain validation is deliberately not represented here: tamper
/// detection is an ordinary boolean outcome of [`Ledger::is_valid`], not an
/// error condition.
///
/// [`Ledger::is_valid`]: crate::ledger::Ledger::is_valid
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Input rejection or a failed transform.
    #[error("analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// A candidate record was rejected by the strict append policy.
    #[error("append rejected: {0}")]
    AppendRejected(#[from] ChainFault),
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
