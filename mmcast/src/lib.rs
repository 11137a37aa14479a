//! mmcast - MatrixMarket dense-array conversion
//!
//! This library converts MatrixMarket dense-array text files into JSON
//! or XML, with matrix names derived from the file names by an
//! underscore convention.
//!
//! ## Architecture
//!
//! mmcast follows a clean specification/implementation separation:
//!
//! - **mmcast-core**: Format rules, naming conventions, and typed
//!   errors (no I/O)
//! - **mmcast**: File reading, directory collection, and the JSON/XML
//!   writers, plus the per-dataset driver binaries
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mmcast::{collect_matrices, write_json};
//!
//! fn example() -> mmcast::Result<()> {
//!     // Parse every MatrixMarket file in one degree directory
//!     let matrices = collect_matrices("export/3")?;
//!
//!     // Write export/matrices_3.json
//!     write_json("export/matrices_3", &matrices)?;
//!     Ok(())
//! }
//! ```

// Re-export core format definitions and naming rules
pub use mmcast_core::{
    // Format model
    ArrayHeader, MatrixBuilder, SparseEntry, SparseMatrix,
    // Naming conventions
    matches_degree, name_from_filename, strip_degree,
    // Errors and constants
    FormatError, ARRAY_BANNER, ZERO_THRESHOLD,
};

// Implementation modules
pub mod collect;
pub mod error;
pub mod json;
pub mod reader;
pub mod xml;

// Public exports
pub use collect::{collect_matrices, MatrixCollection};
pub use error::{ConvertError, Result};
pub use json::write_json;
pub use reader::read_matrix;
pub use xml::write_xml;
