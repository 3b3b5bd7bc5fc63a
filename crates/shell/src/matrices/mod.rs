//! Scoring matrices available in the CLI.

use std::path::Path;

use global_align::ScoringMatrix;

/// The built-in scoring matrices.
#[derive(clap::ValueEnum, Debug, Clone)]
pub enum Matrix {
    /// BLOSUM62 for proteins.
    #[clap(name = "blosum62")]
    Blosum62,
    /// PAM250 for proteins.
    #[clap(name = "pam250")]
    Pam250,
    /// +1 for a match and -1 for a mismatch over the letters `A` to `Z`.
    #[clap(name = "identity")]
    Identity,
}

impl Matrix {
    /// Get the `ScoringMatrix` for the CLI choice.
    pub fn scoring_matrix(&self) -> Result<ScoringMatrix<i64>, String> {
        match self {
            Self::Blosum62 => Ok(ScoringMatrix::blosum62()),
            Self::Pam250 => Ok(ScoringMatrix::pam250()),
            Self::Identity => {
                let letters = (b'A'..=b'Z').collect::<Vec<_>>();
                ScoringMatrix::identity(letters, 1, -1).map_err(|e| e.to_string())
            }
        }
    }
}

/// Reads a scoring matrix in the whitespace-separated table format.
pub fn read<P: AsRef<Path>>(path: P) -> Result<ScoringMatrix<i64>, String> {
    let contents = std::fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.as_ref().display()))?;
    contents.parse().map_err(|e| format!("{}: {e}", path.as_ref().display()))
}
