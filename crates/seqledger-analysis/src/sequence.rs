//! Validated DNA sequences.
//!
//! [`Sequence::parse`] is the alphabet boundary: invalid symbols are
//! rejected here, before any transform runs, so transforms never have to
//! handle out-of-alphabet input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AnalysisError;

/// One nucleotide of the canonical DNA alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Base {
    A,
    C,
    G,
    T,
}

impl Base {
    /// Parse a single symbol. Uppercase only, matching the input contract.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'A' => Some(Self::A),
            'C' => Some(Self::C),
            'G' => Some(Self::G),
            'T' => Some(Self::T),
            _ => None,
        }
    }

    /// The Watson-Crick complement: A↔T, C↔G.
    pub fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::C => Self::G,
            Self::G => Self::C,
        }
    }

    /// The symbol for this base.
    pub fn symbol(self) -> char {
        match self {
            Self::A => 'A',
            Self::C => 'C',
            Self::G => 'G',
            Self::T => 'T',
        }
    }
}

/// An ordered sequence of bases over {A, C, G, T}.
///
/// Immutable once parsed; transforms borrow it and never mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence(Vec<Base>);

impl Sequence {
    /// Validate and parse a raw string into a sequence.
    ///
    /// Rejects the first out-of-alphabet symbol with its position. The
    /// empty string parses to an empty sequence.
    pub fn parse(raw: &str) -> Result<Self, AnalysisError> {
        let mut bases = Vec::with_capacity(raw.len());
        for (position, symbol) in raw.chars().enumerate() {
            match Base::from_symbol(symbol) {
                Some(base) => bases.push(base),
                None => return Err(AnalysisError::InvalidSymbol { symbol, position }),
            }
        }
        Ok(Self(bases))
    }

    /// The bases in order.
    pub fn bases(&self) -> &[Base] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Non-overlapping triplets from offset 0; a trailing partial triplet
    /// is not yielded.
    pub fn codons(&self) -> impl Iterator<Item = &[Base]> {
        self.0.chunks_exact(3)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.0 {
            write!(f, "{}", base.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Sequence {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
