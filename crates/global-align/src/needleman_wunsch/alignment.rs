//! The result of aligning two sequences.

use serde::{Deserialize, Serialize};

use crate::{Score, ScoringMatrix};

/// An optimal global alignment of two sequences.
///
/// Both rows have the same length. Removing the gap character from a row
/// gives back the corresponding input sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment<T> {
    /// The alignment score.
    score: T,
    /// The first and second sequences with gaps inserted.
    rows: [Vec<u8>; 2],
    /// The gap character.
    gap: u8,
}

impl<T: Score> Alignment<T> {
    /// Wraps the score and aligned rows produced by an `Aligner`.
    pub(crate) const fn new(score: T, rows: [Vec<u8>; 2], gap: u8) -> Self {
        Self { score, rows, gap }
    }

    /// The alignment score.
    #[must_use]
    pub const fn score(&self) -> T {
        self.score
    }

    /// The gap character.
    #[must_use]
    pub const fn gap(&self) -> u8 {
        self.gap
    }

    /// The two aligned rows.
    #[must_use]
    pub fn rows(&self) -> [&[u8]; 2] {
        [&self.rows[0], &self.rows[1]]
    }

    /// The aligned rows as strings.
    #[must_use]
    pub fn to_strings(&self) -> [String; 2] {
        self.rows
            .clone()
            .map(|row| String::from_utf8(row).unwrap_or_else(|e| unreachable!("We only added ASCII symbols: {e}")))
    }

    /// Consumes the alignment and returns its score and rows.
    #[must_use]
    pub fn into_parts(self) -> (T, [Vec<u8>; 2]) {
        (self.score, self.rows)
    }

    /// The number of columns in the alignment.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows[0].len()
    }

    /// Whether both input sequences were empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows[0].is_empty()
    }

    /// The rows with their gaps removed, i.e. the original sequences.
    #[must_use]
    pub fn ungapped(&self) -> [Vec<u8>; 2] {
        self.rows
            .each_ref()
            .map(|row| row.iter().copied().filter(|&c| c != self.gap).collect())
    }

    /// Returns the indices where gaps need to be inserted into each original
    /// sequence to produce its aligned row.
    ///
    /// An index `k` means a gap comes before the `k`-th symbol of that
    /// sequence. Consecutive gaps repeat the index.
    #[must_use]
    pub fn gaps(&self) -> [Vec<usize>; 2] {
        self.rows.each_ref().map(|row| {
            let mut consumed = 0;
            let mut gaps = Vec::new();
            for &c in row {
                if c == self.gap {
                    gaps.push(consumed);
                } else {
                    consumed += 1;
                }
            }
            gaps
        })
    }

    /// Recomputes the score column by column.
    ///
    /// Each column of two symbols adds their substitution score, and each
    /// column with one gap subtracts `gap_penalty`. Returns `None` if a column
    /// holds two gaps or a symbol that `matrix` does not know.
    #[must_use]
    pub fn rescore(&self, matrix: &ScoringMatrix<T>, gap_penalty: T) -> Option<T> {
        self.rows[0]
            .iter()
            .zip(self.rows[1].iter())
            .try_fold(T::ZERO, |acc, (&a, &b)| match (a == self.gap, b == self.gap) {
                (true, true) => None,
                (true, false) | (false, true) => Some(acc - gap_penalty),
                (false, false) => matrix.score(a, b).map(|s| acc + s),
            })
    }
}
