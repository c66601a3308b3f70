//! Utility helpers for Showroom

/// Characters `encodeURI` leaves untouched besides ASCII alphanumerics.
const URI_RESERVED: &str = ";,/?:@&=+$-_.!~*'()#";

/// Create a simple slug from a string suitable for element ids.
/// Lowercases the string, converts groups of non-alphanumeric chars to single hyphens,
/// and trims leading/trailing hyphens.
pub fn slugify<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref().to_lowercase();
    let mut out = String::with_capacity(s.len());
    let mut prev_dash = false;

    for ch in s.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch);
            prev_dash = false;
        } else if !prev_dash {
            out.push('-');
            prev_dash = true;
        }
    }

    out.trim_matches('-').to_string()
}

/// Percent-encode a media path the way `encodeURI` does, so file names with
/// spaces or non-ASCII characters still resolve. Path separators, query
/// delimiters and parentheses are kept as-is.
pub fn encode_uri<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();
    let mut out = String::with_capacity(s.len());
    let mut buf = [0u8; 4];

    for ch in s.chars() {
        if ch.is_ascii_alphanumeric() || URI_RESERVED.contains(ch) {
            out.push(ch);
        } else {
            out.push_str(&urlencoding::encode(ch.encode_utf8(&mut buf)));
        }
    }

    out
}
