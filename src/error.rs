//! Error types for html-contacts.
//!
//! Row-level problems are not errors in the default lenient mode; the only
//! failures a caller sees come from I/O, decoding, or an empty result.

use std::io;
use std::path::PathBuf;

/// Error type for conversion operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input path does not point to an existing file.
    #[error("Input file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    /// The input file exists but could not be read.
    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input is not valid UTF-8.
    #[error("Input file '{}' is not valid UTF-8", .path.display())]
    Decode { path: PathBuf },

    /// No row of the first table qualified as a contact.
    #[error("No contact data was found in the HTML file")]
    NoContacts,

    /// A row failed validation while strict mode was enabled.
    #[error("Row {row} is not a valid contact: {reason}")]
    InvalidRow { row: usize, reason: RowDefect },

    /// JSON encoding failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output directory or file could not be written.
    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a table row did not produce a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowDefect {
    /// The row had this many data cells instead of three.
    CellCount(usize),
    /// The cell at this position was empty after trimming.
    EmptyCell(usize),
}

impl std::fmt::Display for RowDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CellCount(n) => write!(f, "expected 3 cells, found {n}"),
            Self::EmptyCell(i) => write!(f, "cell {i} is empty"),
        }
    }
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
