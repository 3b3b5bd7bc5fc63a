//! The commands under the `align-shell` CLI.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use global_align::{Aligner, Alignment, ScoringMatrix};

use crate::{data, matrices};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Align two sequences and print the score followed by both aligned rows.
    Align {
        #[command(flatten)]
        inputs: Inputs,
    },
    /// Print only the optimal alignment score.
    Score {
        #[command(flatten)]
        inputs: Inputs,
    },
}

/// The arguments shared by all commands.
#[derive(clap::Args, Debug)]
pub struct Inputs {
    /// The path to the dataset file, holding one sequence per line.
    #[arg(short('i'), long)]
    inp_path: PathBuf,

    /// The built-in scoring matrix to use.
    #[arg(short('m'), long, default_value = "blosum62")]
    matrix: matrices::Matrix,

    /// The path to a scoring matrix table. Takes precedence over `--matrix`.
    #[arg(long)]
    matrix_path: Option<PathBuf>,

    /// The penalty for aligning a symbol to a gap.
    #[arg(short('g'), long, default_value_t = 5)]
    gap: i64,

    /// The path to the output file. Defaults to stdout.
    #[arg(short('o'), long)]
    out_path: Option<PathBuf>,
}

impl Inputs {
    /// Builds the scoring matrix selected on the command line.
    fn scoring_matrix(&self) -> Result<ScoringMatrix<i64>, String> {
        match &self.matrix_path {
            Some(path) => {
                ftlog::info!("Reading scoring matrix from {path:?}");
                matrices::read(path)
            }
            None => self.matrix.scoring_matrix(),
        }
    }
}

/// Aligns the two sequences of the dataset and writes the alignment.
pub fn align(inputs: &Inputs) -> Result<(), String> {
    let [x, y] = data::read(&inputs.inp_path)?;
    let matrix = inputs.scoring_matrix()?;
    let aligner = Aligner::new(&matrix, inputs.gap).map_err(|e| e.to_string())?;

    let alignment = aligner.align(&x, &y).map_err(|e| e.to_string())?;
    ftlog::info!(
        "Aligned sequences of lengths {} and {} in {} columns with score {}",
        x.len(),
        y.len(),
        alignment.len(),
        alignment.score()
    );

    write_output(inputs.out_path.as_deref(), &render(&alignment))
}

/// Computes the optimal alignment score of the two sequences of the dataset.
pub fn score(inputs: &Inputs) -> Result<(), String> {
    let [x, y] = data::read(&inputs.inp_path)?;
    let matrix = inputs.scoring_matrix()?;
    let aligner = Aligner::new(&matrix, inputs.gap).map_err(|e| e.to_string())?;

    let score = aligner.score(&x, &y).map_err(|e| e.to_string())?;
    ftlog::info!("Scored sequences of lengths {} and {}: {score}", x.len(), y.len());

    write_output(inputs.out_path.as_deref(), &format!("{score}\n"))
}

/// Renders an alignment as three lines: the score, then each aligned row.
fn render(alignment: &Alignment<i64>) -> String {
    let [x, y] = alignment.to_strings();
    format!("{}\n{x}\n{y}\n", alignment.score())
}

/// Writes to the given file, or to stdout if there is none.
fn write_output(out_path: Option<&Path>, contents: &str) -> Result<(), String> {
    match out_path {
        Some(path) => {
            ftlog::info!("Writing output to {path:?}");
            std::fs::write(path, contents).map_err(|e| format!("{}: {e}", path.display()))
        }
        None => {
            print!("{contents}");
            Ok(())
        }
    }
}
