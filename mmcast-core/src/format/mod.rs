//! Format definitions for the MatrixMarket dense-array layout
//!
//! This module contains the rules of the format itself - the accepted
//! banner, the dimensions line, the column-major body order and the
//! zero-suppression cutoff. No I/O operations, only format logic.

pub mod constants;
pub mod header;
pub mod matrix;

// Re-export format definitions
pub use constants::{ARRAY_BANNER, ZERO_THRESHOLD};
pub use header::ArrayHeader;
pub use matrix::{MatrixBuilder, SparseEntry, SparseMatrix};
