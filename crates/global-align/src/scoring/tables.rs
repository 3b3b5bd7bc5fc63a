//! Built-in amino acid substitution tables.
//!
//! Each table is stored as its lower triangle, row `i` holding the scores of
//! symbol `i` against symbols `0..=i` of the accompanying alphabet.

/// The alphabet of [`BLOSUM62`], in row order.
pub const BLOSUM62_CODES: &str = "CSTAGPDEQNHRKMILVWYF";

/// The BLOSUM62 substitution matrix.
///
/// See [here](https://en.wikipedia.org/wiki/BLOSUM) for more information.
#[rustfmt::skip]
pub const BLOSUM62: [&[i8]; 20] = [
    &[ 9],  // C
    &[-1,  4],  // S
    &[-1,  1,  5],  // T
    &[ 0,  1,  0,  4],  // A
    &[-3,  0, -2,  0,  6],  // G
    &[-3, -1, -1, -1, -2,  7],  // P
    &[-3,  0, -1, -2, -1, -1,  6],  // D
    &[-4,  0, -1, -1, -2, -1,  2,  5],  // E
    &[-3,  0, -1, -1, -2, -1,  0,  2,  5],  // Q
    &[-3,  1,  0, -2,  0, -2,  1,  0,  0,  6],  // N
    &[-3, -1, -2, -2, -2, -2,  1,  0,  0,  1,  8],  // H
    &[-3, -1, -1, -1, -2, -2, -2,  0,  1,  0,  0,  5],  // R
    &[-3,  0, -1, -1, -2, -1, -1,  1,  1,  0, -1,  2,  5],  // K
    &[-1, -1, -1, -1, -3, -2, -3, -2,  0, -2, -2, -1, -1,  5],  // M
    &[-1, -2, -1, -1, -4, -3, -3, -3, -3, -3, -3, -3, -3,  1,  4],  // I
    &[-1, -2, -1, -1, -4, -3, -4, -3, -2, -3, -3, -2, -2,  2,  2,  4],  // L
    &[-1, -2,  0,  0, -3, -2, -3, -2, -2, -3, -3, -3, -2,  1,  3,  1,  4],  // V
    &[-2, -3, -2, -3, -2, -4, -4, -3, -2, -4, -2, -3, -3, -1, -3, -2, -3, 11],  // W
    &[-2, -2, -2, -2, -3, -3, -3, -2, -1, -2,  2, -2, -2, -1, -1, -1, -1,  2,  7],  // Y
    &[-2, -2, -2, -2, -3, -4, -3, -3, -3, -3, -1, -3, -3,  0,  0,  0, -1,  1,  3,  6],  // F
];

/// The alphabet of [`PAM250`], in row order.
pub const PAM250_CODES: &str = "ARNDCQEGHILKMFPSTWYV";

/// The PAM250 substitution matrix.
///
/// See [here](https://en.wikipedia.org/wiki/Point_accepted_mutation) for more
/// information.
#[rustfmt::skip]
pub const PAM250: [&[i8]; 20] = [
    &[ 2],  // A
    &[-2,  6],  // R
    &[ 0,  0,  2],  // N
    &[ 0, -1,  2,  4],  // D
    &[-2, -4, -4, -5, 12],  // C
    &[ 0,  1,  1,  2, -5,  4],  // Q
    &[ 0, -1,  1,  3, -5,  2,  4],  // E
    &[ 1, -3,  0,  1, -3, -1,  0,  5],  // G
    &[-1,  2,  2,  1, -3,  3,  1, -2,  6],  // H
    &[-1, -2, -2, -2, -2, -2, -2, -3, -2,  5],  // I
    &[-2, -3, -3, -4, -6, -2, -3, -4, -2,  2,  6],  // L
    &[-1,  3,  1,  0, -5,  1,  0, -2,  0, -2, -3,  5],  // K
    &[-1,  0, -2, -3, -5, -1, -2, -3, -2,  2,  4,  0,  6],  // M
    &[-3, -4, -3, -6, -4, -5, -5, -5, -2,  1,  2, -5,  0,  9],  // F
    &[ 1,  0,  0, -1, -3,  0, -1,  0,  0, -2, -3, -1, -2, -5,  6],  // P
    &[ 1,  0,  1,  0,  0, -1,  0,  1, -1, -1, -3,  0, -2, -3,  1,  2],  // S
    &[ 1, -1,  0,  0, -2, -1,  0,  0, -1,  0, -2,  0, -1, -3,  0,  1,  3],  // T
    &[-6,  2, -4, -7, -8, -5, -7, -7, -3, -5, -2, -3, -4,  0, -6, -2, -5, 17],  // W
    &[-3, -4, -2, -4,  0, -4, -4, -5,  0, -1, -1, -4, -2,  7, -5, -3, -3,  0, 10],  // Y
    &[ 0, -2, -2, -2, -2, -2, -2, -1, -2,  4,  2, -2,  2, -1, -1, -1,  0, -6, -2,  4],  // V
];
