//! Sparse entry model and dense-body accumulation

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::FormatError;
use crate::format::constants::ZERO_THRESHOLD;
use crate::format::header::ArrayHeader;

/// One surviving matrix entry
///
/// Indices are 1-based. The value keeps the exact spelling from the
/// input file; a parsed float is only used transiently for the zero
/// test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseEntry {
    pub row: u32,
    pub column: u32,
    pub value: String,
}

/// A dense-array matrix reduced to its non-zero entries
///
/// Entries stay in column-major read order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix {
    pub rows: u32,
    pub columns: u32,
    pub entries: Vec<SparseEntry>,
}

impl SparseMatrix {
    /// Matrix dimensions as (rows, columns)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.rows, self.columns)
    }

    /// Number of entries that survived zero suppression
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }
}

/// Accumulates body values into a [`SparseMatrix`]
///
/// Values arrive one per body line in column-major order; values at or
/// below [`ZERO_THRESHOLD`] are dropped immediately rather than stored.
#[derive(Debug)]
pub struct MatrixBuilder {
    header: ArrayHeader,
    next: usize,
    entries: Vec<SparseEntry>,
}

impl MatrixBuilder {
    /// Start a body with the given dimensions
    pub fn new(header: ArrayHeader) -> Self {
        Self {
            header,
            next: 0,
            entries: Vec::new(),
        }
    }

    /// Accept the next body value
    pub fn push_value(&mut self, raw: &str) -> Result<(), FormatError> {
        if self.next >= self.header.entry_count() {
            return Err(FormatError::TooManyValues);
        }
        let parsed: f64 = raw.parse().map_err(|_| FormatError::InvalidValue)?;
        let (row, column) = self.header.position(self.next);
        self.next += 1;
        if parsed.abs() > ZERO_THRESHOLD {
            self.entries.push(SparseEntry {
                row,
                column,
                value: String::from(raw),
            });
        }
        Ok(())
    }

    /// Number of values accepted so far
    pub fn len(&self) -> usize {
        self.next
    }

    /// True when no value has been accepted yet
    pub fn is_empty(&self) -> bool {
        self.next == 0
    }

    /// Finish the body, checking that every position was filled
    pub fn finish(self) -> Result<SparseMatrix, FormatError> {
        let expected = self.header.entry_count();
        if self.next < expected {
            return Err(FormatError::Truncated {
                expected,
                actual: self.next,
            });
        }
        Ok(SparseMatrix {
            rows: self.header.rows,
            columns: self.header.columns,
            entries: self.entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(rows: u32, columns: u32, values: &[&str]) -> Result<SparseMatrix, FormatError> {
        let mut builder = MatrixBuilder::new(ArrayHeader { rows, columns });
        for value in values {
            builder.push_value(value)?;
        }
        builder.finish()
    }

    #[test]
    fn test_column_major_accumulation() {
        let matrix = build(2, 2, &["1.0", "2.0", "3.0", "4.0"]).unwrap();

        assert_eq!(matrix.dimensions(), (2, 2));
        assert_eq!(matrix.nnz(), 4);
        let positions: Vec<(u32, u32)> = matrix.entries.iter().map(|e| (e.row, e.column)).collect();
        assert_eq!(positions, [(1, 1), (2, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_zero_suppression() {
        // 1e-20 is below the cutoff, 2e-15 is above it
        let matrix = build(2, 2, &["1e-20", "2e-15", "0.0", "-3.5"]).unwrap();

        assert_eq!(matrix.nnz(), 2);
        assert_eq!(matrix.entries[0].value, "2e-15");
        assert_eq!(matrix.entries[1].value, "-3.5");
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // exactly 1e-15 counts as zero
        let matrix = build(1, 2, &["1e-15", "-1e-15"]).unwrap();
        assert_eq!(matrix.nnz(), 0);
    }

    #[test]
    fn test_value_spelling_is_preserved() {
        let matrix = build(1, 2, &["0.30000000000000004", "1.0E+2"]).unwrap();

        assert_eq!(matrix.entries[0].value, "0.30000000000000004");
        assert_eq!(matrix.entries[1].value, "1.0E+2");
    }

    #[test]
    fn test_truncated_body() {
        assert_eq!(
            build(2, 2, &["1.0", "2.0"]),
            Err(FormatError::Truncated {
                expected: 4,
                actual: 2
            })
        );
    }

    #[test]
    fn test_surplus_values() {
        assert_eq!(
            build(1, 1, &["1.0", "2.0"]),
            Err(FormatError::TooManyValues)
        );
    }

    #[test]
    fn test_invalid_value() {
        assert_eq!(build(1, 1, &["abc"]), Err(FormatError::InvalidValue));
    }

    #[test]
    fn test_nan_is_suppressed() {
        // NaN fails the magnitude comparison, so it counts as zero
        let matrix = build(1, 1, &["nan"]).unwrap();
        assert_eq!(matrix.nnz(), 0);
    }
}
