use std::borrow::Cow;

use percent_encoding::percent_decode_str;

/// Percent-decode `input`, keeping it verbatim when the escapes do not
/// decode to valid UTF-8. Malformed escapes such as `%zz` stay literal.
pub fn decode(input: &str) -> Cow<'_, str> {
    percent_decode_str(input)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(input))
}

/// Convert arbitrary text into the slug alphabet `[a-z0-9]+(-[a-z0-9]+)*`.
///
/// Whitespace runs and hyphens become a single separator, every other
/// character outside the alphabet is dropped, and separators never lead,
/// trail or repeat. Returns an empty string when nothing alphanumeric is
/// left. Normalizing a normalized slug returns it unchanged.
pub fn normalize(input: &str) -> String {
    let lowered = decode(input).to_lowercase();

    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for ch in lowered.trim().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else if ch == '-' || ch.is_whitespace() {
            pending_hyphen = true;
        }
    }

    slug
}
