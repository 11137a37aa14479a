//! Directory collection of MatrixMarket files

use std::path::Path;

use indexmap::IndexMap;
use mmcast_core::{name_from_filename, SparseMatrix};

use crate::error::{ConvertError, Result};
use crate::reader::read_matrix;

/// Mapping from logical matrix name to its parsed matrix
///
/// Iteration order is insertion order, which follows the directory
/// listing order of the source files.
pub type MatrixCollection = IndexMap<String, SparseMatrix>;

/// Parse every file in `dir` into a name -> matrix collection
///
/// Names are derived from the file names by the underscore convention.
/// Two files resolving to the same logical name keep the later one
/// (last write wins), with a warning.
pub fn collect_matrices<P: AsRef<Path>>(dir: P) -> Result<MatrixCollection> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(ConvertError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut matrices = MatrixCollection::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = name_from_filename(&entry.file_name().to_string_lossy());
        let matrix = read_matrix(entry.path())?;
        if matrices.insert(name.clone(), matrix).is_some() {
            log::warn!(
                "duplicate matrix name {name:?}, keeping {}",
                entry.path().display()
            );
        }
    }
    Ok(matrices)
}
