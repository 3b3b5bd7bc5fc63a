//! Needleman-Wunsch algorithm for global sequence alignment with a linear gap
//! penalty.

mod aligner;
mod alignment;
mod ops;

pub use aligner::{Aligner, NwTable};
pub use alignment::Alignment;
pub use ops::Direction;
