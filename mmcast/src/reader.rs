//! MatrixMarket dense-array file reader

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use mmcast_core::{ArrayHeader, FormatError, MatrixBuilder, SparseMatrix};

use crate::error::{ConvertError, Result};

/// Read one dense-array MatrixMarket file into a sparse matrix
///
/// The first line must carry the `array real general` banner and the
/// second line the dimensions; every following non-blank line is one
/// value in column-major order. Entries at or below the zero threshold
/// are dropped.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut lines = BufReader::new(file).lines();

    let banner = next_line(&mut lines)?.ok_or_else(|| fail(path, FormatError::InvalidHeader))?;
    ArrayHeader::parse_banner(&banner).map_err(|e| fail(path, e))?;

    let dims = next_line(&mut lines)?.ok_or_else(|| fail(path, FormatError::InvalidDimensions))?;
    let header = ArrayHeader::parse_dimensions(&dims).map_err(|e| fail(path, e))?;

    let mut builder = MatrixBuilder::new(header);
    for line in lines {
        let line = line?;
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }
        builder.push_value(raw).map_err(|e| fail(path, e))?;
    }
    builder.finish().map_err(|e| fail(path, e))
}

fn next_line(lines: &mut Lines<BufReader<File>>) -> Result<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn fail(path: &Path, source: FormatError) -> ConvertError {
    ConvertError::format(path, source)
}
