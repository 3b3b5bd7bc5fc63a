//! Moves through the Needleman-Wunsch DP table.

/// The move that produced the best score of a cell in the DP table.
///
/// Rows of the table follow the first sequence and columns follow the second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Diagonal (Up and Left) for a match or substitution.
    Diagonal,
    /// Up for a symbol of the first sequence aligned to a gap (a deletion).
    Up,
    /// Left for a symbol of the second sequence aligned to a gap (an insertion).
    Left,
}
