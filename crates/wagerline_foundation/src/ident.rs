//! Reversible codec between display names and storage-safe identifiers.
//!
//! Every character outside `[A-Za-z]` is written as `_<codepoint>_`, with the
//! code point in decimal. Decoding reverses any `_<digits>_` run that names a
//! valid character and leaves every other run untouched.
//!
//! ```
//! use wagerline_foundation::{decode_identifier, encode_identifier};
//!
//! assert_eq!(encode_identifier("Last Color"), "Last_32_Color");
//! assert_eq!(decode_identifier("Last_32_Color"), "Last Color");
//! ```

use crate::error::{Error, Result};

/// Encodes a display name as a storage-safe identifier.
#[must_use]
pub fn encode_identifier(display: &str) -> String {
    let mut out = String::with_capacity(display.len());
    for ch in display.chars() {
        if ch.is_ascii_alphabetic() {
            out.push(ch);
        } else {
            out.push('_');
            out.push_str(&u32::from(ch).to_string());
            out.push('_');
        }
    }
    out
}

/// Decodes a storage-safe identifier back into its display name.
///
/// Runs that do not parse, or that name no valid character, are kept
/// verbatim.
#[must_use]
pub fn decode_identifier(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut rest = token;

    while let Some(start) = rest.find('_') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match escape_run(tail) {
            Some(len) => {
                let run = &tail[..len];
                match decode_run(run) {
                    Ok(ch) => out.push(ch),
                    Err(_) => out.push_str(run),
                }
                rest = &tail[len..];
            }
            None => {
                out.push('_');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Returns the byte length of an `_<digits>_` run at the start of `s`.
fn escape_run(s: &str) -> Option<usize> {
    let digits = s[1..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let close = 1 + digits;
    (s.as_bytes().get(close) == Some(&b'_')).then_some(close + 1)
}

/// Converts one `_<digits>_` run to its character.
fn decode_run(run: &str) -> Result<char> {
    run[1..run.len() - 1]
        .parse::<u32>()
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| Error::new(crate::ErrorKind::MalformedIdentifierToken(run.to_string())))
}
