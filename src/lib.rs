//! # html-contacts
//!
//! Extracts contact records (alias, name, phone) from the first table of an
//! HTML document and writes them as a JSON array.
//!
//! ## Quick Start
//!
//! ```rust
//! use html_contacts::extract;
//!
//! let html = r#"<table>
//!   <tr><th>Alias</th><th>Name</th><th>Phone</th></tr>
//!   <tr><td>jdoe</td><td> Jane Doe </td><td>555-1234</td></tr>
//! </table>"#;
//!
//! let result = extract(html)?;
//! assert_eq!(result.contacts.len(), 1);
//! assert_eq!(result.contacts[0].name, "Jane Doe");
//! # Ok::<(), html_contacts::Error>(())
//! ```
//!
//! ## Row rule
//!
//! Only the first `<table>` in document order is read. A row becomes a
//! contact when it has exactly three `<td>` cells and none of them is empty
//! after trimming; cells map to `alias`, `name`, `phone` by position. Other
//! rows are skipped, unless [`Options::strict`] asks for them to be rejected.

mod error;
mod options;
mod result;

/// DOM helpers for locating the table, its rows and cells.
pub mod dom;

/// Row projection onto contacts.
pub mod extract;

/// Input decoding.
pub mod encoding;

/// File conversion pipeline (read, extract, serialize, write).
pub mod convert;

// Public API - re-exports
pub use convert::{convert_file, Config, DEFAULT_OUTPUT};
pub use error::{Error, Result, RowDefect};
pub use options::Options;
pub use result::{Contact, ExtractResult};

/// Extracts contacts from an HTML document using default options.
///
/// Malformed rows are skipped, so this never fails; a document without a
/// qualifying row yields an empty result.
///
/// # Example
///
/// ```rust
/// use html_contacts::extract;
///
/// let result = extract("<p>no table</p>")?;
/// assert!(result.is_empty());
/// assert!(!result.table_found);
/// # Ok::<(), html_contacts::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract(html: &str) -> Result<ExtractResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts contacts from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use html_contacts::{extract_with_options, Error, Options};
///
/// let html = "<table><tr><td>jdoe</td><td>Jane Doe</td></tr></table>";
/// let options = Options { strict: true };
/// assert!(matches!(
///     extract_with_options(html, &options),
///     Err(Error::InvalidRow { row: 0, .. })
/// ));
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractResult> {
    extract::extract_contacts(html, options)
}

