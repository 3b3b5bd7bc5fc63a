//! Substitution matrices for the Needleman-Wunsch aligner.

mod tables;

use core::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{errors::Sequence, AlignmentError, Result, Score};

pub use tables::{BLOSUM62, BLOSUM62_CODES, PAM250, PAM250_CODES};

/// The number of distinct byte values.
const NUM_CHARS: usize = 1 + (u8::MAX as usize);

/// A square table of substitution scores over a fixed alphabet.
///
/// Symbols are single ASCII bytes. The mapping from symbol to row/column is a
/// lookup table built once, at construction. Letters are matched
/// case-insensitively unless the alphabet contains both cases of a letter.
///
/// The matrix is immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix<T>", into = "RawMatrix<T>")]
pub struct ScoringMatrix<T: Score> {
    /// The symbols, in row order.
    alphabet: Vec<u8>,
    /// `scores[i][j]` is the score of aligning `alphabet[i]` with `alphabet[j]`.
    scores: Vec<Vec<T>>,
    /// Maps every byte to its index in the alphabet, if it has one.
    lookup: Vec<Option<usize>>,
}

/// The serialized form of a [`ScoringMatrix`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawMatrix<T> {
    /// The symbols, in row order.
    pub alphabet: String,
    /// The rows of scores.
    pub scores: Vec<Vec<T>>,
}

impl<T: Score> TryFrom<RawMatrix<T>> for ScoringMatrix<T> {
    type Error = AlignmentError;

    fn try_from(raw: RawMatrix<T>) -> Result<Self> {
        Self::new(raw.alphabet, raw.scores)
    }
}

impl<T: Score> From<ScoringMatrix<T>> for RawMatrix<T> {
    fn from(matrix: ScoringMatrix<T>) -> Self {
        Self {
            alphabet: matrix.alphabet.iter().map(|&c| char::from(c)).collect(),
            scores: matrix.scores,
        }
    }
}

impl<T: Score> ScoringMatrix<T> {
    /// Create a new scoring matrix.
    ///
    /// # Arguments
    ///
    /// * `alphabet`: The symbols, in the order of the rows and columns of `scores`.
    /// * `scores`: A square table, `scores[i][j]` being the score of aligning
    ///   the `i`-th symbol with the `j`-th symbol.
    ///
    /// # Errors
    ///
    /// * If the alphabet is empty, contains a duplicate, or contains a byte
    ///   that is not a printable, non-whitespace ASCII character.
    /// * If `scores` is not a square table with one row per symbol.
    pub fn new<A: AsRef<[u8]>>(alphabet: A, scores: Vec<Vec<T>>) -> Result<Self> {
        let alphabet = alphabet.as_ref().to_vec();
        if alphabet.is_empty() {
            return Err(AlignmentError::MalformedMatrix("the alphabet is empty".into()));
        }

        if let Some(&c) = alphabet.iter().find(|c| !c.is_ascii_graphic()) {
            return Err(AlignmentError::MalformedMatrix(format!(
                "symbol {:?} is not a printable ASCII character",
                char::from(c)
            )));
        }

        for (i, a) in alphabet.iter().enumerate() {
            if alphabet[..i].contains(a) {
                return Err(AlignmentError::MalformedMatrix(format!(
                    "symbol {:?} appears more than once",
                    char::from(*a)
                )));
            }
        }

        if scores.len() != alphabet.len() {
            return Err(AlignmentError::MalformedMatrix(format!(
                "expected {} rows of scores, found {}",
                alphabet.len(),
                scores.len()
            )));
        }

        if let Some((i, row)) = scores.iter().enumerate().find(|(_, row)| row.len() != alphabet.len()) {
            return Err(AlignmentError::MalformedMatrix(format!(
                "row {:?} has {} scores, expected {}",
                char::from(alphabet[i]),
                row.len(),
                alphabet.len()
            )));
        }

        Ok(Self::build(alphabet, scores))
    }

    /// Builds the lookup table for an alphabet that is already known to be valid.
    fn build(alphabet: Vec<u8>, scores: Vec<Vec<T>>) -> Self {
        let mut lookup = vec![None; NUM_CHARS];
        for (i, &c) in alphabet.iter().enumerate() {
            lookup[c as usize] = Some(i);
        }

        // Letters whose other case is absent from the alphabet share its index.
        for (i, &c) in alphabet.iter().enumerate() {
            if c.is_ascii_alphabetic() {
                let other = if c.is_ascii_uppercase() {
                    c.to_ascii_lowercase()
                } else {
                    c.to_ascii_uppercase()
                };
                lookup[other as usize].get_or_insert(i);
            }
        }

        Self {
            alphabet,
            scores,
            lookup,
        }
    }

    /// Create a matrix that scores every identical pair with `match_` and
    /// every other pair with `mismatch`.
    ///
    /// # Errors
    ///
    /// See [`ScoringMatrix::new`].
    pub fn identity<A: AsRef<[u8]>>(alphabet: A, match_: T, mismatch: T) -> Result<Self> {
        let n = alphabet.as_ref().len();
        let scores = (0..n)
            .map(|i| (0..n).map(|j| if i == j { match_ } else { mismatch }).collect())
            .collect();
        Self::new(alphabet, scores)
    }

    /// Expands one of the built-in lower-triangular tables into a full matrix.
    fn from_lower_triangle(codes: &str, rows: &[&[i8]]) -> Self {
        let n = codes.len();
        let mut scores = vec![vec![T::ZERO; n]; n];
        for (i, row) in rows.iter().enumerate() {
            for (j, &cost) in row.iter().enumerate() {
                scores[i][j] = T::from(cost);
                scores[j][i] = T::from(cost);
            }
        }
        Self::build(codes.as_bytes().to_vec(), scores)
    }

    /// The BLOSUM62 substitution matrix for proteins.
    #[must_use]
    pub fn blosum62() -> Self {
        Self::from_lower_triangle(BLOSUM62_CODES, &BLOSUM62)
    }

    /// The PAM250 substitution matrix for proteins.
    #[must_use]
    pub fn pam250() -> Self {
        Self::from_lower_triangle(PAM250_CODES, &PAM250)
    }

    /// The symbols of the matrix, in row order.
    #[must_use]
    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    /// The number of symbols in the alphabet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.alphabet.len()
    }

    /// Always `false`: construction rejects empty alphabets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alphabet.is_empty()
    }

    /// The row/column of a symbol, if it is part of the alphabet.
    #[must_use]
    pub fn index_of(&self, symbol: u8) -> Option<usize> {
        self.lookup[symbol as usize]
    }

    /// The score of aligning `a` with `b`, if both are part of the alphabet.
    #[must_use]
    pub fn score(&self, a: u8, b: u8) -> Option<T> {
        Some(self.scores[self.index_of(a)?][self.index_of(b)?])
    }

    /// The score at row `i` and column `j`.
    pub(crate) fn score_at(&self, i: usize, j: usize) -> T {
        self.scores[i][j]
    }

    /// The largest absolute value in the table.
    pub(crate) fn max_magnitude(&self) -> i128 {
        self.scores
            .iter()
            .flatten()
            .map(|&s| Into::<i128>::into(s).abs())
            .max()
            .unwrap_or(0)
    }

    /// Whether `score(a, b) == score(b, a)` for every pair of symbols.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        (0..self.len()).all(|i| (0..i).all(|j| self.scores[i][j] == self.scores[j][i]))
    }

    /// Maps every symbol of a sequence to its index in the alphabet.
    ///
    /// # Errors
    ///
    /// If the sequence contains a symbol outside the alphabet. The reported
    /// position is a byte offset.
    pub(crate) fn encode(&self, seq: &[u8], sequence: Sequence) -> Result<Vec<usize>> {
        seq.iter()
            .enumerate()
            .map(|(position, &c)| {
                self.index_of(c).ok_or(AlignmentError::InvalidSymbol {
                    symbol: char::from(c),
                    sequence,
                    position,
                })
            })
            .collect()
    }
}

/// Renders the matrix in the whitespace-separated table format accepted by
/// [`FromStr`]: a header of symbols, then one labelled row per symbol.
impl<T: Score> fmt::Display for ScoringMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = 1 + self
            .scores
            .iter()
            .flatten()
            .map(|s| s.to_string().len())
            .max()
            .unwrap_or(1);

        write!(f, " ")?;
        for &c in &self.alphabet {
            write!(f, "{:>width$}", char::from(c))?;
        }
        writeln!(f)?;

        for (&c, row) in self.alphabet.iter().zip(self.scores.iter()) {
            write!(f, "{}", char::from(c))?;
            for s in row {
                write!(f, "{:>width$}", s.to_string())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl<T: Score> FromStr for ScoringMatrix<T> {
    type Err = AlignmentError;

    fn from_str(s: &str) -> Result<Self> {
        let mut lines = s.lines().map(str::trim).filter(|line| !line.is_empty());

        let header = lines
            .next()
            .ok_or_else(|| AlignmentError::MalformedMatrix("the table is empty".into()))?;
        let alphabet = header
            .split_whitespace()
            .map(|token| match token.as_bytes() {
                &[c] => Ok(c),
                _ => Err(AlignmentError::MalformedMatrix(format!(
                    "header token {token:?} is not a single symbol"
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        let scores = lines
            .enumerate()
            .map(|(i, line)| {
                let mut tokens = line.split_whitespace();
                let label = tokens.next().unwrap_or_default();
                match alphabet.get(i) {
                    Some(&c) if label.as_bytes() == [c] => (),
                    Some(&c) => {
                        return Err(AlignmentError::MalformedMatrix(format!(
                            "row {} is labelled {label:?}, expected {:?}",
                            i + 1,
                            char::from(c)
                        )))
                    }
                    None => {
                        return Err(AlignmentError::MalformedMatrix(format!(
                            "row {} ({label:?}) has no matching header symbol",
                            i + 1
                        )))
                    }
                }
                tokens
                    .map(|token| {
                        token.parse::<T>().map_err(|_| {
                            AlignmentError::MalformedMatrix(format!("row {label:?}: cannot parse score {token:?}"))
                        })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(alphabet, scores)
    }
}
