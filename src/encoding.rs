//! Input decoding.
//!
//! Contact exports are expected to be UTF-8. A leading byte order mark is
//! dropped; any invalid byte sequence makes decoding fail instead of being
//! replaced with U+FFFD, so corrupted names never reach the JSON output.

use encoding_rs::UTF_8;

/// Decode UTF-8 HTML bytes, stripping a leading BOM.
///
/// Returns `None` if the bytes are not valid UTF-8.
///
/// # Examples
///
/// ```
/// use html_contacts::encoding::decode_utf8;
///
/// let html = b"\xEF\xBB\xBF<table></table>";
/// assert_eq!(decode_utf8(html).as_deref(), Some("<table></table>"));
/// assert_eq!(decode_utf8(b"caf\xE9"), None);
/// ```
#[must_use]
pub fn decode_utf8(bytes: &[u8]) -> Option<String> {
    let (decoded, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        return None;
    }
    Some(decoded.into_owned())
}
