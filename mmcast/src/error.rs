//! Error types for mmcast conversions

use std::path::PathBuf;

use mmcast_core::FormatError;
use thiserror::Error;

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur during a conversion run
///
/// The library only ever returns these; whether a batch aborts or
/// skips the offending file is the caller's decision.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// An input file does not follow the dense-array format
    #[error("{path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    /// A matrix name does not follow the naming convention
    #[error("malformed matrix name {name:?}: {source}")]
    Name {
        name: String,
        #[source]
        source: FormatError,
    },

    /// The input directory is missing or not a directory
    #[error("directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// Underlying read or write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// XML serialization failure
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

impl ConvertError {
    /// Attach the offending file path to a format error
    pub fn format(path: impl Into<PathBuf>, source: FormatError) -> Self {
        ConvertError::Format {
            path: path.into(),
            source,
        }
    }

    /// Attach the offending matrix name to a naming error
    pub fn name(name: impl Into<String>, source: FormatError) -> Self {
        ConvertError::Name {
            name: name.into(),
            source,
        }
    }
}

impl From<tempfile::PersistError> for ConvertError {
    fn from(err: tempfile::PersistError) -> Self {
        ConvertError::Io(err.error)
    }
}
