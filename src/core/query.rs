//! Query and fragment rules.

use std::collections::BTreeMap;

use percent_encoding::percent_decode;
use url::form_urlencoded;

use crate::types::ParsedUrl;

/// Sort query parameters by key, then the values of each key.
///
/// Pairs are decoded and re-encoded with `application/x-www-form-urlencoded`
/// rules, so `b=4&a=%7e&a=1` becomes `a=1&a=%7E&b=4`. Keys and values are
/// compared and kept as raw bytes: `%FF` stays `%FF` even though it is not
/// UTF-8. A query without any pair is removed, `?` included.
pub fn sort_query(url: &mut ParsedUrl) {
    let Some(query) = url.query.as_deref() else {
        return;
    };

    let mut grouped: BTreeMap<Vec<u8>, Vec<Vec<u8>>> = BTreeMap::new();
    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        grouped.entry(form_decode(key)).or_default().push(form_decode(value));
    }

    if grouped.is_empty() {
        url.query = None;
        return;
    }

    let mut pairs = Vec::new();
    for (key, values) in &mut grouped {
        values.sort();
        let key: String = form_urlencoded::byte_serialize(key).collect();
        for value in values.iter() {
            let value: String = form_urlencoded::byte_serialize(value).collect();
            pairs.push(format!("{key}={value}"));
        }
    }
    url.query = Some(pairs.join("&"));
}

/// Decode one form-encoded key or value: `+` is a space, `%XX` a byte.
fn form_decode(text: &str) -> Vec<u8> {
    let spaced: Vec<u8> = text
        .bytes()
        .map(|byte| if byte == b'+' { b' ' } else { byte })
        .collect();
    percent_decode(&spaced).collect()
}

/// Drop a bare `?` with nothing after it.
pub fn remove_empty_query_separator(url: &mut ParsedUrl) {
    if url.query.as_deref() == Some("") {
        url.query = None;
    }
}

pub fn remove_fragment(url: &mut ParsedUrl) {
    url.fragment = None;
}
