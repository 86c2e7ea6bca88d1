//! Minimal percent-encoding for path-valued query parameters.
//!
//! Used for the `redirectTo` round-trip: the guard encodes the original
//! path into the login URL, and the login page decodes and validates it
//! after sign-in. Only internal paths are honored on the way back, so a
//! crafted link can never bounce a user to an external origin.

#[cfg(test)]
#[path = "urlenc_test.rs"]
mod urlenc_test;

/// Name of the return-target query parameter.
pub const REDIRECT_PARAM: &str = "redirectTo";

/// Percent-encode a string for use as a query parameter value.
///
/// Everything outside the RFC 3986 unreserved set is escaped, including `/`.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(char::from(byte));
            }
            _ => {
                out.push('%');
                out.push(hex_digit(byte >> 4));
                out.push(hex_digit(byte & 0x0f));
            }
        }
    }
    out
}

fn hex_digit(nibble: u8) -> char {
    char::from(match nibble {
        0..=9 => b'0' + nibble,
        _ => b'A' + (nibble - 10),
    })
}

/// Decode a percent-encoded query parameter value.
///
/// Returns `None` for truncated or non-hex escapes and for byte sequences
/// that are not valid UTF-8. `+` is treated as a space.
#[must_use]
pub fn decode_component(encoded: &str) -> Option<String> {
    let bytes = encoded.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let escape = encoded.get(i + 1..i + 3)?;
                out.push(u8::from_str_radix(escape, 16).ok()?);
                i += 3;
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            other => {
                out.push(other);
                i += 1;
            }
        }
    }
    String::from_utf8(out).ok()
}

/// Extract a validated return target from a location search string.
///
/// Accepts `search` with or without the leading `?`. The decoded value is
/// honored only when it is an internal path: it must start with `/` and
/// must not be scheme-relative (`//…`).
#[must_use]
pub fn redirect_target(search: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        if key != REDIRECT_PARAM {
            continue;
        }
        let decoded = decode_component(value)?;
        if decoded.starts_with('/') && !decoded.starts_with("//") {
            return Some(decoded);
        }
        return None;
    }
    None
}
