//! The `Score` trait for the signed integers an alignment can be scored in.

use core::{
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Sub, SubAssign},
    str::FromStr,
};

/// A signed integer type in which substitution scores, gap penalties and
/// alignment scores are expressed.
///
/// We provide implementations for `i16`, `i32` and `i64`. All built-in
/// substitution tables fit in an `i8`, hence the `From<i8>` bound. Widening
/// to `i128` lets an aligner check ahead of time that a score cannot leave
/// the range `MIN..=MAX`.
pub trait Score:
    Copy
    + Ord
    + Debug
    + Display
    + FromStr
    + Send
    + Sync
    + From<i8>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Into<i128>
    + AddAssign
    + SubAssign
    + 'static
{
    /// The additive identity.
    const ZERO: Self;

    /// The smallest representable score.
    const MIN: Self;

    /// The largest representable score.
    const MAX: Self;

    /// Whether the score is strictly negative.
    fn is_negative(self) -> bool {
        self < Self::ZERO
    }
}

/// Implements `Score` for primitive signed integers.
macro_rules! impl_score {
    ($($ty:ty),*) => {
        $(
            impl Score for $ty {
                const ZERO: Self = 0;
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;
            }
        )*
    }
}

impl_score!(i16, i32, i64);
