//! Percent-encoding for the body of a `javascript:` URL.

use super::{Encoded, Wrapped};

/// Printable ASCII characters that still have to be escaped.
///
/// `%` starts an escape, `#` starts a fragment, and `"`, `<`, `>` and the
/// backtick break out of an HTML `href` attribute or are rewritten by
/// browsers when the link is dragged.
const RESERVED: &[char] = &['%', '#', '"', '<', '>', '`'];

/// Whether `c` can appear raw in a bookmarklet URL.
///
/// Every other printable ASCII character is left alone, JavaScript
/// punctuation included, to keep the link short.
pub fn is_url_safe(c: char) -> bool {
    c.is_ascii_graphic() && !RESERVED.contains(&c)
}

/// Percent-encode the characters that are unsafe in a `javascript:` URL.
///
/// Unsafe characters are written as `%XX` with uppercase hex digits, one
/// escape per UTF-8 byte. Space, control characters and all non-ASCII
/// characters are unsafe. Encoding the output a second time is not supported.
pub fn encode(code: &Wrapped) -> Encoded {
    let text = code.as_str();
    let mut encoded = String::with_capacity(text.len());
    let mut buf = [0u8; 4];

    for c in text.chars() {
        if is_url_safe(c) {
            encoded.push(c);
        } else {
            for byte in c.encode_utf8(&mut buf).as_bytes() {
                encoded.push_str(&format!("%{:02X}", byte));
            }
        }
    }

    Encoded(encoded)
}
