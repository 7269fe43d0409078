//! Error types for refpage operations
//!
//! Only failures that stop a whole document live here. Anomalies inside a document (unknown
//! tags, duplicate values, malformed structure) are recorded as
//! [`Diagnostic`](crate::diagnostics::Diagnostic)s instead and never abort parsing.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for refpage operations.
pub type Result<T> = std::result::Result<T, RefpageError>;

/// Errors that abort the processing of a single refpage.
#[derive(Error, Debug)]
pub enum RefpageError {
    /// Reading a refpage or an `xi:include` target failed.
    #[error("I/O error reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The XML parser rejected a refpage or an `xi:include` target.
    #[error("XML parsing error in '{}': {source}", path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    /// The document root is not a `refentry` element.
    #[error("Document '{name}' has root <{found}>, expected <refentry>")]
    MissingRoot { name: String, found: String },

    /// An inclusion mask is not a binary number of at most eleven digits.
    #[error("Invalid include mask '{0}': expected up to 11 binary digits")]
    InvalidIncludeMask(String),

    /// No format is registered under the requested name.
    #[error("Format '{0}' not found")]
    FormatNotFound(String),

    /// The format does not implement the requested direction.
    #[error("Operation not supported: {0}")]
    NotSupported(String),

    /// A serializer failed to produce output.
    #[error("Serialization error: {0}")]
    Serialization(String),
}
