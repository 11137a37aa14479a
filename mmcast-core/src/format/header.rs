//! Dense-array header parsing
//!
//! A dense-array MatrixMarket file opens with a fixed banner line and a
//! dimensions line; everything after that is one value per line in
//! column-major order.

use crate::error::FormatError;
use crate::format::constants::ARRAY_BANNER;

/// Dimensions of a dense-array MatrixMarket file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayHeader {
    /// Number of rows
    pub rows: u32,
    /// Number of columns
    pub columns: u32,
}

impl ArrayHeader {
    /// Banner accepted for input files
    pub const BANNER: &'static str = ARRAY_BANNER;

    /// Check the banner line
    ///
    /// Only the prefix is compared; the format allows trailing
    /// annotations after the banner.
    pub fn parse_banner(line: &str) -> Result<(), FormatError> {
        if line.starts_with(Self::BANNER) {
            Ok(())
        } else {
            Err(FormatError::InvalidHeader)
        }
    }

    /// Parse the dimensions line: row count first, then column count
    pub fn parse_dimensions(line: &str) -> Result<Self, FormatError> {
        let mut parts = line.split_whitespace();
        let rows = parse_dim(parts.next())?;
        let columns = parse_dim(parts.next())?;
        Ok(Self { rows, columns })
    }

    /// Total number of values the body must contain
    pub fn entry_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// Map a 0-based body line index to its 1-based (row, column)
    ///
    /// Dense-array bodies are column-major: the k-th value belongs to
    /// row `k mod rows`, column `k div rows`.
    pub fn position(&self, index: usize) -> (u32, u32) {
        let rows = self.rows as usize;
        ((index % rows) as u32 + 1, (index / rows) as u32 + 1)
    }
}

fn parse_dim(part: Option<&str>) -> Result<u32, FormatError> {
    let value: u32 = part
        .ok_or(FormatError::InvalidDimensions)?
        .parse()
        .map_err(|_| FormatError::InvalidDimensions)?;
    if value == 0 {
        return Err(FormatError::InvalidDimensions);
    }
    Ok(value)
}
