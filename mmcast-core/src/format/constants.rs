//! Format constants for the MatrixMarket dense-array specification

/// Banner accepted as the first line of an input file
pub const ARRAY_BANNER: &str = "%%MatrixMarket matrix array real general";

/// Values whose absolute value is at or below this cutoff are treated
/// as exactly zero and omitted from the sparse entry list
pub const ZERO_THRESHOLD: f64 = 1e-15;
