//! Result types for extraction output.

use serde::{Deserialize, Serialize};

/// A contact record taken from one table row.
///
/// All three fields are non-empty and already trimmed. Fields serialize in
/// declaration order: `alias`, `name`, `phone`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Short handle from the first cell.
    pub alias: String,

    /// Display name from the second cell.
    pub name: String,

    /// Phone number from the third cell, kept as text.
    pub phone: String,
}

impl Contact {
    /// Creates a contact from already validated field values.
    #[must_use]
    pub fn new(alias: impl Into<String>, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            name: name.into(),
            phone: phone.into(),
        }
    }
}

/// Result of extracting contacts from an HTML document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractResult {
    /// Contacts in source row order.
    pub contacts: Vec<Contact>,

    /// Whether the document contained a table at all.
    pub table_found: bool,

    /// Rows visited in the first table.
    pub rows_seen: usize,

    /// Rows that did not produce a contact.
    pub rows_skipped: usize,
}

impl ExtractResult {
    /// Returns `true` if no contact was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
