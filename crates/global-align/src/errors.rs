//! Errors raised while building an aligner or aligning two sequences.

use thiserror::Error;

/// Which of the two input sequences a symbol was read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sequence {
    /// The first sequence, laid out along the rows of the DP table.
    First,
    /// The second sequence, laid out along the columns of the DP table.
    Second,
}

impl core::fmt::Display for Sequence {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Second => write!(f, "second"),
        }
    }
}

/// Everything that can go wrong in this crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlignmentError {
    /// A sequence contains a symbol that the scoring matrix does not know.
    #[error("symbol {symbol:?} at position {position} of the {sequence} sequence is not in the scoring alphabet")]
    InvalidSymbol {
        /// The offending symbol.
        symbol: char,
        /// The sequence it was found in.
        sequence: Sequence,
        /// Its zero-based index in that sequence.
        position: usize,
    },

    /// The gap penalty must be non-negative.
    #[error("gap penalty must be non-negative, got {0}")]
    NegativeGapPenalty(String),

    /// The gap marker collides with a symbol of the alphabet.
    #[error("gap marker {0:?} is part of the scoring alphabet")]
    GapInAlphabet(char),

    /// The gap marker is not a printable ASCII character.
    #[error("gap marker {0:#04x} is not a printable ASCII character")]
    InvalidGap(u8),

    /// An alignment with this many columns could reach a score outside the
    /// range of the score type.
    #[error("an alignment with {columns} columns may overflow `{score_type}`")]
    ScoreOverflow {
        /// The combined length of both sequences.
        columns: usize,
        /// The name of the score type.
        score_type: &'static str,
    },

    /// A scoring matrix could not be built or parsed.
    #[error("malformed scoring matrix: {0}")]
    MalformedMatrix(String),
}

/// Convenience alias for results in this crate.
pub type Result<T> = core::result::Result<T, AlignmentError>;
