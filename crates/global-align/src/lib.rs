#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

pub mod errors;
pub mod needleman_wunsch;
pub mod scoring;

mod score;

pub use errors::{AlignmentError, Result};
pub use needleman_wunsch::{Aligner, Alignment, Direction};
pub use score::Score;
pub use scoring::ScoringMatrix;

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
