//! The Needleman-Wunsch aligner.

use rayon::prelude::*;

use crate::{errors::Sequence, AlignmentError, Result, Score, ScoringMatrix};

use super::{Alignment, Direction};

/// A table of alignment scores between prefixes of two sequences, paired with
/// the move that produced each score.
pub type NwTable<T> = Vec<Vec<(T, Direction)>>;

/// A Needleman-Wunsch aligner with a linear gap penalty.
///
/// The aligner maximizes the alignment score. It borrows an immutable
/// [`ScoringMatrix`] and holds no other state, so a single aligner may be
/// shared across threads.
#[derive(Clone, Debug)]
pub struct Aligner<'a, T: Score> {
    /// The substitution scores.
    matrix: &'a ScoringMatrix<T>,
    /// The score subtracted for every symbol aligned to a gap.
    gap_penalty: T,
    /// The gap character.
    gap: u8,
    /// Whether the matrix is symmetric, which lets `score` swap its inputs.
    symmetric: bool,
    /// The largest amount by which one column can change a score.
    step: i128,
}

impl<'a, T: Score> Aligner<'a, T> {
    /// Create a new aligner using `-` as the gap character.
    ///
    /// # Errors
    ///
    /// See [`Aligner::with_gap_char`].
    pub fn new(matrix: &'a ScoringMatrix<T>, gap_penalty: T) -> Result<Self> {
        Self::with_gap_char(matrix, gap_penalty, b'-')
    }

    /// Create a new aligner that marks gaps with `gap`.
    ///
    /// # Errors
    ///
    /// * If `gap_penalty` is negative.
    /// * If `gap` is not a printable ASCII character.
    /// * If `gap` is part of the scoring alphabet.
    pub fn with_gap_char(matrix: &'a ScoringMatrix<T>, gap_penalty: T, gap: u8) -> Result<Self> {
        if gap_penalty.is_negative() {
            return Err(AlignmentError::NegativeGapPenalty(gap_penalty.to_string()));
        }

        if !gap.is_ascii_graphic() {
            return Err(AlignmentError::InvalidGap(gap));
        }

        if matrix.index_of(gap).is_some() {
            return Err(AlignmentError::GapInAlphabet(char::from(gap)));
        }

        Ok(Self {
            matrix,
            gap_penalty,
            gap,
            symmetric: matrix.is_symmetric(),
            step: matrix.max_magnitude().max(Into::<i128>::into(gap_penalty)),
        })
    }

    /// Get the gap character.
    #[must_use]
    pub const fn gap(&self) -> u8 {
        self.gap
    }

    /// Get the gap penalty.
    #[must_use]
    pub const fn gap_penalty(&self) -> T {
        self.gap_penalty
    }

    /// Get the scoring matrix.
    #[must_use]
    pub const fn matrix(&self) -> &ScoringMatrix<T> {
        self.matrix
    }

    /// Maps both sequences onto the rows of the scoring matrix.
    ///
    /// Fails if a symbol is unknown or if some path through the DP table
    /// could leave the range of `T`.
    fn encode(&self, x: &[u8], y: &[u8]) -> Result<[Vec<usize>; 2]> {
        let encoded = [
            self.matrix.encode(x, Sequence::First)?,
            self.matrix.encode(y, Sequence::Second)?,
        ];
        self.check_range(x.len().saturating_add(y.len()))?;
        Ok(encoded)
    }

    /// Checks that every score of an alignment with at most `columns`
    /// columns fits in `T`.
    ///
    /// A cell `(i, j)` is reached in at most `i + j` moves, each changing the
    /// score by at most `step`, so `columns * step` bounds every cell and
    /// every candidate for the last cell.
    fn check_range(&self, columns: usize) -> Result<()> {
        let fits = i128::try_from(columns)
            .ok()
            .and_then(|c| c.checked_mul(self.step))
            .is_some_and(|extent| extent <= Into::<i128>::into(T::MAX) && -extent >= Into::<i128>::into(T::MIN));

        if fits {
            Ok(())
        } else {
            Err(AlignmentError::ScoreOverflow {
                columns,
                score_type: core::any::type_name::<T>(),
            })
        }
    }

    /// Compute the dynamic programming table for the Needleman-Wunsch algorithm.
    ///
    /// The value at position `(i, j)` is the best score of aligning the first
    /// `i` symbols of `x` with the first `j` symbols of `y`, together with
    /// the move that achieved it.
    ///
    /// # Errors
    ///
    /// * If either sequence contains a symbol outside the scoring alphabet.
    /// * If the scores could overflow `T`.
    pub fn dp_table<S: AsRef<[u8]>>(&self, x: &S, y: &S) -> Result<NwTable<T>> {
        let [x, y] = self.encode(x.as_ref(), y.as_ref())?;
        Ok(self.fill(&x, &y))
    }

    /// Fills the DP table for two encoded sequences.
    fn fill(&self, x: &[usize], y: &[usize]) -> NwTable<T> {
        let mut dp = vec![vec![(T::ZERO, Direction::Diagonal); y.len() + 1]; x.len() + 1];

        // The first column deletes every symbol of `x`.
        for i in 1..dp.len() {
            dp[i][0] = (dp[i - 1][0].0 - self.gap_penalty, Direction::Up);
        }

        // The first row inserts every symbol of `y`.
        for j in 1..dp[0].len() {
            dp[0][j] = (dp[0][j - 1].0 - self.gap_penalty, Direction::Left);
        }

        for (i, &xc) in x.iter().enumerate() {
            for (j, &yc) in y.iter().enumerate() {
                let diag = dp[i][j].0 + self.matrix.score_at(xc, yc);
                let up = dp[i][j + 1].0 - self.gap_penalty;
                let left = dp[i + 1][j].0 - self.gap_penalty;

                // Ties go to the diagonal, then to a deletion.
                dp[i + 1][j + 1] = if diag >= up && diag >= left {
                    (diag, Direction::Diagonal)
                } else if up >= left {
                    (up, Direction::Up)
                } else {
                    (left, Direction::Left)
                };
            }
        }

        dp
    }

    /// Align two sequences using the Needleman-Wunsch algorithm.
    ///
    /// An empty sequence is aligned entirely against gaps.
    ///
    /// # Errors
    ///
    /// * If either sequence contains a symbol outside the scoring alphabet.
    /// * If the scores could overflow `T`.
    ///
    /// No table is allocated in either case.
    pub fn align<S: AsRef<[u8]>>(&self, x: &S, y: &S) -> Result<Alignment<T>> {
        let (x, y) = (x.as_ref(), y.as_ref());
        let [x_idx, y_idx] = self.encode(x, y)?;

        if x.is_empty() || y.is_empty() {
            ftlog::debug!("Gap-only alignment for sequences of lengths {} and {}", x.len(), y.len());
        }

        let table = self.fill(&x_idx, &y_idx);
        let score = table[x.len()][y.len()].0;
        let moves = trace_back(&table);

        Ok(Alignment::new(score, self.reconstruct(x, y, &moves), self.gap))
    }

    /// Builds the aligned sequences by replaying the moves from the start.
    fn reconstruct(&self, x: &[u8], y: &[u8], moves: &[Direction]) -> [Vec<u8>; 2] {
        let [mut x_aligned, mut y_aligned] = [Vec::with_capacity(moves.len()), Vec::with_capacity(moves.len())];
        let [mut i, mut j] = [0, 0];

        for direction in moves {
            match direction {
                Direction::Diagonal => {
                    x_aligned.push(x[i]);
                    y_aligned.push(y[j]);
                    i += 1;
                    j += 1;
                }
                Direction::Up => {
                    x_aligned.push(x[i]);
                    y_aligned.push(self.gap);
                    i += 1;
                }
                Direction::Left => {
                    x_aligned.push(self.gap);
                    y_aligned.push(y[j]);
                    j += 1;
                }
            }
        }

        [x_aligned, y_aligned]
    }

    /// Compute only the optimal alignment score.
    ///
    /// This keeps two rows of the DP table instead of the whole table. When
    /// the matrix is symmetric the rows run along the shorter sequence.
    ///
    /// # Errors
    ///
    /// * If either sequence contains a symbol outside the scoring alphabet.
    /// * If the scores could overflow `T`.
    pub fn score<S: AsRef<[u8]>>(&self, x: &S, y: &S) -> Result<T> {
        let [mut x, mut y] = self.encode(x.as_ref(), y.as_ref())?;
        if self.symmetric && y.len() > x.len() {
            core::mem::swap(&mut x, &mut y);
        }

        let mut prev = Vec::with_capacity(y.len() + 1);
        let mut acc = T::ZERO;
        prev.push(acc);
        for _ in &y {
            acc -= self.gap_penalty;
            prev.push(acc);
        }
        let mut curr = vec![T::ZERO; y.len() + 1];

        for &xc in &x {
            curr[0] = prev[0] - self.gap_penalty;
            for (j, &yc) in y.iter().enumerate() {
                let diag = prev[j] + self.matrix.score_at(xc, yc);
                let up = prev[j + 1] - self.gap_penalty;
                let left = curr[j] - self.gap_penalty;
                curr[j + 1] = diag.max(up).max(left);
            }
            core::mem::swap(&mut prev, &mut curr);
        }

        Ok(prev[y.len()])
    }

    /// Align many independent pairs of sequences in parallel.
    ///
    /// The results are in the same order as the pairs.
    pub fn par_align<S: AsRef<[u8]> + Sync>(&self, pairs: &[(S, S)]) -> Vec<Result<Alignment<T>>> {
        ftlog::debug!("Aligning {} pairs in parallel", pairs.len());
        pairs.par_iter().map(|(x, y)| self.align(x, y)).collect()
    }
}

/// Follows the recorded moves from the bottom-right corner of the table back
/// to the top-left corner, and returns them in start-to-end order.
fn trace_back<T: Score>(table: &NwTable<T>) -> Vec<Direction> {
    let [mut row_i, mut col_i] = [table.len() - 1, table[0].len() - 1];
    let mut moves = Vec::with_capacity(row_i + col_i);

    while row_i > 0 || col_i > 0 {
        let direction = table[row_i][col_i].1;
        match direction {
            Direction::Diagonal => {
                row_i -= 1;
                col_i -= 1;
            }
            Direction::Up => row_i -= 1,
            Direction::Left => col_i -= 1,
        }
        moves.push(direction);
    }

    moves.reverse();
    moves
}
