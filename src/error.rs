//! Error types for pagemark library.

use std::io;
use thiserror::Error;

/// Result type alias for pagemark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building inputs or resolving outlines.
///
/// Heading resolution itself never fails; these errors come from malformed
/// inputs handed over by the conversion layer, invalid options, or I/O.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The page corpus violates the contiguous 1-based numbering contract.
    #[error("Invalid page corpus: {0}")]
    InvalidCorpus(String),

    /// A page number that cannot be represented (zero, negative, too large).
    #[error("Invalid page number: {0}")]
    InvalidPageNumber(i64),

    /// Heading text is empty or too short to be meaningful.
    #[error("Invalid heading: {0:?}")]
    InvalidHeading(String),

    /// Heading level outside H1..H6.
    #[error("Invalid heading level: {0:?}")]
    InvalidLevel(String),

    /// Resolve options are out of range.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Input file kind is not supported.
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),
}
