//! JSON output for matrix collections
//!
//! The document is a JSON array with one object per matrix, in the
//! collection's iteration order:
//!
//! ```json
//! [
//!   {
//!     "name": "beta(3,4)",
//!     "rows": 2,
//!     "columns": 2,
//!     "entries": [[1, 1, 0.5], [2, 2, -1.25]]
//!   }
//! ]
//! ```
//!
//! Entry values are emitted as number tokens that keep the exact
//! spelling from the input file.

use std::io::{BufWriter, Write};
use std::path::Path;

use mmcast_core::{SparseEntry, SparseMatrix};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, SerializeTuple, Serializer};
use tempfile::NamedTempFile;

use crate::collect::MatrixCollection;
use crate::error::Result;

/// Write a matrix collection to `<dest>.json`
///
/// The document goes through a structured serializer, so the output is
/// valid JSON for empty, single and multi matrix collections alike. It
/// is written to a temporary file next to the destination and renamed
/// into place on success, leaving no partial output behind.
pub fn write_json<P: AsRef<Path>>(dest: P, matrices: &MatrixCollection) -> Result<()> {
    let dest = dest.as_ref().with_extension("json");
    let dir = dest.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = NamedTempFile::new_in(dir.unwrap_or_else(|| Path::new(".")))?;
    {
        let mut out = BufWriter::new(tmp.as_file_mut());
        serde_json::to_writer_pretty(&mut out, &Document(matrices))?;
        out.write_all(b"\n")?;
        out.flush()?;
    }
    tmp.persist(&dest)?;
    Ok(())
}

/// The whole output document: an array of matrix records
struct Document<'a>(&'a MatrixCollection);

impl Serialize for Document<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for (name, matrix) in self.0 {
            seq.serialize_element(&Record { name, matrix })?;
        }
        seq.end()
    }
}

struct Record<'a> {
    name: &'a str,
    matrix: &'a SparseMatrix,
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("name", self.name)?;
        map.serialize_entry("rows", &self.matrix.rows)?;
        map.serialize_entry("columns", &self.matrix.columns)?;
        map.serialize_entry("entries", &Entries(&self.matrix.entries))?;
        map.end()
    }
}

struct Entries<'a>(&'a [SparseEntry]);

impl Serialize for Entries<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for entry in self.0 {
            seq.serialize_element(&Triple(entry))?;
        }
        seq.end()
    }
}

/// One `[row, column, value]` triple
///
/// The value is re-emitted as a JSON number with its original spelling
/// (serde_json keeps the text thanks to `arbitrary_precision`).
struct Triple<'a>(&'a SparseEntry);

impl Serialize for Triple<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let number: serde_json::Number = self
            .0
            .value
            .parse()
            .map_err(serde::ser::Error::custom)?;
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.0.row)?;
        tuple.serialize_element(&self.0.column)?;
        tuple.serialize_element(&number)?;
        tuple.end()
    }
}
