//! Error types for table printing.
//!
//! Grid and cell construction never fail: absent values, absent headers and
//! ragged rows are absorbed by padding. Only configuration problems and
//! failing output streams surface as errors.

use std::fmt;
use std::io;

/// A printer configuration that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The output encoding label is not known.
    UnsupportedEncoding(String),
    /// `max_cell_width` was zero.
    ZeroCellWidth,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedEncoding(label) => {
                write!(f, "unsupported output encoding: {label:?}")
            }
            Self::ZeroCellWidth => write!(f, "max cell width must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Error returned by the print operations.
#[derive(Debug)]
pub enum TableError {
    /// The printer configuration is invalid.
    Configuration(ConfigurationError),
    /// Writing to the output stream failed.
    Io(io::Error),
}

impl TableError {
    /// Whether this error was caused by the printer configuration.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(err) => write!(f, "failed to print table: {err}"),
            Self::Io(err) => write!(f, "failed to print table: {err}"),
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Configuration(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<ConfigurationError> for TableError {
    fn from(err: ConfigurationError) -> Self {
        Self::Configuration(err)
    }
}

impl From<io::Error> for TableError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TableError>;
