use crate::character_sets::{Component, QUERY_COMPONENT_SET, SafeSet, is_ascii_printable};
use crate::compat::{Cow, String, ToString};
use percent_encoding::{percent_decode_str, percent_encode_byte, utf8_percent_encode};

/// Check if `bytes` starts with a well-formed `%XX` escape
fn is_percent_escape(bytes: &[u8]) -> bool {
    matches!(bytes, [b'%', hi, lo, ..] if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit())
}

/// Percent-encode `text`, leaving unreserved characters and the ASCII
/// characters of `safe` as they are.
///
/// Existing `%XX` escapes are copied through unchanged, so quoting an
/// already quoted string is a no-op.
///
/// ```
/// assert_eq!(urlcore::quote("a b/c", "/"), "a%20b/c");
/// assert_eq!(urlcore::quote("100%25 sure", ""), "100%25%20sure");
/// ```
pub fn quote(text: &str, safe: &str) -> String {
    quote_with(text, SafeSet::from_chars(safe))
}

/// Percent-encode `text` against a prebuilt safe set.
pub fn quote_with(text: &str, safe: SafeSet) -> String {
    let bytes = text.as_bytes();

    // Fast path: nothing to encode
    if bytes.iter().all(|&b| safe.contains(b)) {
        return text.to_string();
    }

    let mut result = String::with_capacity(bytes.len() + bytes.len() / 2);
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'%' && is_percent_escape(&bytes[i..]) {
            // The escape is pure ASCII, so these are char boundaries
            result.push_str(&text[i..i + 3]);
            i += 3;
            continue;
        }
        if safe.contains(b) {
            result.push(b as char);
        } else {
            result.push_str(percent_encode_byte(b));
        }
        i += 1;
    }
    result
}

/// Percent-encode `text` with the safe set configured for `component`.
pub fn quote_component(text: &str, component: Component) -> String {
    quote_with(text, component.safe_set())
}

/// Decode every well-formed `%XX` escape in `text`.
///
/// Malformed escapes (`%` not followed by two hex digits) are kept literally.
/// Byte sequences that are not valid UTF-8 after decoding are replaced with
/// U+FFFD rather than reported as errors.
pub fn unquote(text: &str) -> String {
    if memchr::memchr(b'%', text.as_bytes()).is_none() {
        return text.to_string();
    }
    percent_decode_str(text).decode_utf8_lossy().into_owned()
}

/// Return the character index of the first ASCII character outside the
/// printable range (0x20..=0x7E), if any. Non-ASCII characters are allowed.
pub fn find_ascii_non_printable(text: &str) -> Option<usize> {
    text.chars()
        .position(|c| c.is_ascii() && !is_ascii_printable(c as u8))
}

/// Encode a query key or value: unreserved characters pass through,
/// space becomes `+`, everything else is `%XX`.
pub fn form_encode(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    form_encode_into(&mut result, text);
    result
}

/// Form-encode `text` directly into `buffer`
pub fn form_encode_into(buffer: &mut String, text: &str) {
    buffer.reserve(text.len());
    for (i, piece) in text.split(' ').enumerate() {
        if i > 0 {
            buffer.push('+');
        }
        for chunk in utf8_percent_encode(piece, QUERY_COMPONENT_SET) {
            buffer.push_str(chunk);
        }
    }
}

/// Decode a query key or value: `+` becomes space, then `%XX` escapes
/// are decoded leniently as in [`unquote`].
pub fn form_decode(text: &str) -> String {
    let bytes = text.as_bytes();
    if memchr::memchr2(b'%', b'+', bytes).is_none() {
        return text.to_string();
    }

    let text: Cow<'_, str> = if memchr::memchr(b'+', bytes).is_some() {
        Cow::Owned(text.replace('+', " "))
    } else {
        Cow::Borrowed(text)
    };
    percent_decode_str(&text).decode_utf8_lossy().into_owned()
}
