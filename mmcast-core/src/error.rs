//! Error types for MatrixMarket parsing and name resolution

/// Errors that can occur while interpreting MatrixMarket content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// First line is not the accepted dense-array banner
    InvalidHeader,
    /// Dimensions line is not two positive integers
    InvalidDimensions,
    /// A body line could not be parsed as a decimal value
    InvalidValue,
    /// Body ended before rows * columns values were read
    Truncated { expected: usize, actual: usize },
    /// Body contains more values than rows * columns
    TooManyValues,
    /// Name does not follow the `base(a,b)` convention
    MalformedName,
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatError::InvalidHeader => {
                write!(f, "not a MatrixMarket array real general file")
            }
            FormatError::InvalidDimensions => write!(f, "invalid dimensions line"),
            FormatError::InvalidValue => write!(f, "invalid matrix value"),
            FormatError::Truncated { expected, actual } => write!(
                f,
                "truncated matrix body: expected {expected} values, got {actual}"
            ),
            FormatError::TooManyValues => {
                write!(f, "matrix body holds more values than rows * columns")
            }
            FormatError::MalformedName => {
                write!(f, "matrix name does not match the naming convention")
            }
        }
    }
}

impl core::error::Error for FormatError {}

/// Result type for format operations
pub type Result<T> = core::result::Result<T, FormatError>;
