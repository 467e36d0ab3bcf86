//! Percent-escape normalization for userinfo, path, query and fragment.
//!
//! Hosts are left alone: their escapes belong to IDNA processing.

use percent_encoding::{percent_decode, percent_encode_byte};

use crate::error::UrlnormError;
use crate::types::ParsedUrl;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EscapeAction {
    Uppercase,
    DecodeUnreserved,
}

/// Uppercase the hex digits of every `%XX` escape (`%3f` becomes `%3F`).
///
/// The set of escaped bytes does not change.
pub fn uppercase_escapes(url: &mut ParsedUrl) -> Result<(), UrlnormError> {
    rewrite_components(url, EscapeAction::Uppercase)
}

/// Decode escapes of unreserved bytes (ALPHA / DIGIT / `-` / `.` / `_` / `~`).
///
/// Every other escape, `%25` and reserved delimiters included, stays as is.
pub fn decode_unnecessary_escapes(url: &mut ParsedUrl) -> Result<(), UrlnormError> {
    rewrite_components(url, EscapeAction::DecodeUnreserved)
}

/// Unreserved characters per RFC 3986 §2.3.
pub fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

fn rewrite_components(url: &mut ParsedUrl, action: EscapeAction) -> Result<(), UrlnormError> {
    if let Some(userinfo) = url.userinfo.as_mut() {
        *userinfo = rewrite_escapes(userinfo, "userinfo", action)?;
    }
    url.path = rewrite_escapes(&url.path, "path", action)?;
    if let Some(query) = url.query.as_mut() {
        *query = rewrite_escapes(query, "query", action)?;
    }
    if let Some(fragment) = url.fragment.as_mut() {
        *fragment = rewrite_escapes(fragment, "fragment", action)?;
    }
    Ok(())
}

fn rewrite_escapes(
    text: &str,
    component: &'static str,
    action: EscapeAction,
) -> Result<String, UrlnormError> {
    if !text.contains('%') {
        return Ok(text.to_string());
    }

    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;

    for (i, _) in text.match_indices('%') {
        let byte = decode_triple(bytes, i).ok_or_else(|| {
            let end = (i + 3).min(bytes.len());
            UrlnormError::EscapeDecode {
                component,
                escape: String::from_utf8_lossy(&bytes[i..end]).into_owned(),
            }
        })?;

        // `%` and hex digits are ASCII, so both offsets are char boundaries.
        out.push_str(&text[copied..i]);
        match action {
            EscapeAction::Uppercase => out.push_str(percent_encode_byte(byte)),
            EscapeAction::DecodeUnreserved if is_unreserved(byte) => out.push(byte as char),
            EscapeAction::DecodeUnreserved => out.push_str(&text[i..i + 3]),
        }
        copied = i + 3;
    }

    out.push_str(&text[copied..]);
    Ok(out)
}

/// The byte encoded by the `%XX` triple at `start`, if it is one.
fn decode_triple(bytes: &[u8], start: usize) -> Option<u8> {
    let triple = bytes.get(start..start + 3)?;
    let decoded: Vec<u8> = percent_decode(triple).collect();
    match decoded[..] {
        [byte] => Some(byte),
        _ => None,
    }
}
