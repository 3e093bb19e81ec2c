//! Contact extraction from the first table of a document.
//!
//! Each row of the first `<table>` is projected onto a [`Contact`] when it has
//! exactly three `<td>` cells whose trimmed text is non-empty. Anything else
//! is skipped, or rejected when [`Options::strict`] is set.

use log::debug;

use crate::dom::{self, Document, Selection};
use crate::error::{Error, Result, RowDefect};
use crate::options::Options;
use crate::result::{Contact, ExtractResult};

/// Number of cells a contact row must have: alias, name, phone.
pub const CONTACT_CELLS: usize = 3;

/// Parse `html` and extract contacts from its first table.
///
/// # Errors
///
/// Only returns an error in strict mode, when a data row is malformed.
pub fn extract_contacts(html: &str, options: &Options) -> Result<ExtractResult> {
    let doc = dom::parse(html);
    extract_from_document(&doc, options)
}

/// Extract contacts from an already parsed document.
///
/// A document without a table yields an empty result with
/// `table_found == false`.
///
/// # Errors
///
/// Only returns an error in strict mode, when a data row is malformed.
pub fn extract_from_document(doc: &Document, options: &Options) -> Result<ExtractResult> {
    match dom::first_table(doc) {
        Some(table) => project_table(&table, options),
        None => {
            debug!("document contains no <table>");
            Ok(ExtractResult::default())
        }
    }
}

/// Walk the rows of `table` and collect the qualifying contacts.
///
/// # Errors
///
/// Only returns an error in strict mode, when a data row is malformed.
pub fn project_table(table: &Selection, options: &Options) -> Result<ExtractResult> {
    let rows = dom::table_rows(table);
    let mut result = ExtractResult {
        contacts: Vec::with_capacity(rows.len()),
        table_found: true,
        rows_seen: rows.len(),
        rows_skipped: 0,
    };

    for (index, row) in rows.iter().enumerate() {
        match project_row(row) {
            Ok(contact) => result.contacts.push(contact),
            Err(defect) => {
                // A row with no td at all carries no data, even in strict mode.
                if options.strict && defect != RowDefect::CellCount(0) {
                    return Err(Error::InvalidRow { row: index, reason: defect });
                }
                debug!("skipping row {index}: {defect}");
                result.rows_skipped += 1;
            }
        }
    }

    debug!(
        "projected {} contacts from {} rows ({} skipped)",
        result.contacts.len(),
        result.rows_seen,
        result.rows_skipped
    );
    Ok(result)
}

/// Turn one table row into a contact.
///
/// Cells are assigned by position: alias, name, phone.
///
/// # Errors
///
/// Returns the [`RowDefect`] that disqualifies the row.
pub fn project_row(row: &Selection) -> std::result::Result<Contact, RowDefect> {
    let cells = dom::row_cells(row);
    if cells.len() != CONTACT_CELLS {
        return Err(RowDefect::CellCount(cells.len()));
    }

    let fields: Vec<String> = cells
        .iter()
        .map(|cell| dom::text_content(cell).trim().to_string())
        .collect();
    if let Some(pos) = fields.iter().position(String::is_empty) {
        return Err(RowDefect::EmptyCell(pos));
    }

    let [alias, name, phone]: [String; CONTACT_CELLS] = fields
        .try_into()
        .map_err(|f: Vec<String>| RowDefect::CellCount(f.len()))?;
    Ok(Contact { alias, name, phone })
}
