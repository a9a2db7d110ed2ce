//! Error types for the catalog crate.
//!
//! Every variant is fatal to startup: the loader never hands back a
//! partially built catalog.

use thiserror::Error;

/// Errors that can occur while loading the movie catalog
#[derive(Error, Debug)]
pub enum CatalogLoadError {
    /// Source file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source is not valid JSON or its top level is not an array
    #[error("Malformed catalog source: {reason}")]
    Malformed { reason: String },

    /// The source parsed but contains no records
    #[error("Catalog source contains no movies")]
    EmptySource,

    /// A record is missing a field or carries a field of the wrong type
    ///
    /// `index` is the zero-based position of the record in the source.
    #[error("Invalid movie record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// A record parsed but one of its values breaks a catalog invariant
    #[error("Invalid value for {field} in record {index}: {value}")]
    InvalidValue {
        index: usize,
        field: String,
        value: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogLoadError>;
