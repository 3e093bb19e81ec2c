//! DOM operations for table scanning.
//!
//! Thin helpers over the `dom_query` crate. Parsing goes through the html5ever
//! tree builder, so unclosed tags and stray markup are repaired rather than
//! rejected.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

/// Table sections that may hold rows between `<table>` and `<tr>`.
const ROW_GROUPS: &[&str] = &["thead", "tbody", "tfoot"];

/// Parse an HTML document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Check whether the first node of the selection is the given tag.
#[must_use]
pub fn is_tag(sel: &Selection, tag: &str) -> bool {
    tag_name(sel).is_some_and(|t| t == tag)
}

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Find the first `<table>` in document order.
///
/// Returns `None` if the document has no table.
#[must_use]
pub fn first_table(doc: &Document) -> Option<Selection<'_>> {
    let table = doc.select("table").first();
    table.exists().then_some(table)
}

/// Collect the rows that belong to `table`, in document order.
///
/// A row belongs to the table when it is a direct child of the table or of
/// one of its `thead`/`tbody`/`tfoot` sections. Rows of a table nested inside
/// a cell are not included.
#[must_use]
pub fn table_rows<'a>(table: &Selection<'a>) -> Vec<Selection<'a>> {
    let mut rows = Vec::new();
    for child in table.children().iter() {
        if is_tag(&child, "tr") {
            rows.push(child);
        } else if tag_name(&child).is_some_and(|t| ROW_GROUPS.contains(&t.as_str())) {
            rows.extend(child.children().iter().filter(|c| is_tag(c, "tr")));
        }
    }
    rows
}

/// Collect the direct `<td>` cells of a row, in document order.
///
/// `<th>` cells are not data cells and are not counted.
#[must_use]
pub fn row_cells<'a>(row: &Selection<'a>) -> Vec<Selection<'a>> {
    row.children().iter().filter(|c| is_tag(c, "td")).collect()
}
