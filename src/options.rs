//! Configuration options for contact extraction.
//!
//! The `Options` struct controls how rows that do not form a contact are
//! treated. Use `Default::default()` for the standard lenient behavior.

/// Configuration options for contact extraction.
///
/// # Example
///
/// ```rust
/// use html_contacts::Options;
///
/// // Lenient: malformed rows are dropped silently
/// let options = Options::default();
/// assert!(!options.strict);
///
/// // Strict: a malformed data row aborts extraction
/// let options = Options { strict: true };
/// assert!(options.strict);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Reject malformed rows instead of skipping them.
    ///
    /// When enabled, a row with a cell count other than three, or with a
    /// cell that is empty after trimming, fails extraction with
    /// [`Error::InvalidRow`](crate::Error::InvalidRow). Rows without any
    /// `td` cells (e.g. `th`-only header rows) are still ignored.
    ///
    /// Default: `false`
    pub strict: bool,
}
