//! Rules for the scheme, host and port.

use crate::types::ParsedUrl;

pub fn lowercase_scheme(url: &mut ParsedUrl) {
    if let Some(scheme) = url.scheme.as_mut() {
        scheme.make_ascii_lowercase();
    }
}

/// Lowercase the host; userinfo keeps its case.
pub fn lowercase_host(url: &mut ParsedUrl) {
    if let Some(host) = url.host.as_mut() {
        *host = host.to_lowercase();
    }
}

/// Drop `:80` for http and `:443` for https.
///
/// The port is compared against the default of the URL's own scheme, so
/// `https://host:80/` keeps its port.
pub fn remove_default_port(url: &mut ParsedUrl) {
    let default_port = match url.scheme.as_deref() {
        Some(scheme) if scheme.eq_ignore_ascii_case("http") => "80",
        Some(scheme) if scheme.eq_ignore_ascii_case("https") => "443",
        _ => return,
    };
    if url.port.as_deref() == Some(default_port) {
        url.port = None;
    }
}

/// Drop a `:` that is not followed by a port, whatever the scheme.
pub fn remove_empty_port_separator(url: &mut ParsedUrl) {
    if url.port.as_deref() == Some("") {
        url.port = None;
    }
}

pub fn force_http(url: &mut ParsedUrl) {
    if let Some(scheme) = url.scheme.as_mut() {
        if scheme.eq_ignore_ascii_case("https") {
            *scheme = "http".to_string();
        }
    }
}

pub fn remove_www(url: &mut ParsedUrl) {
    if let Some(host) = url.host.as_mut() {
        if host.len() > 4 && has_www_prefix(host) {
            host.drain(..4);
        }
    }
}

/// Prepend `www.` to named hosts; IP literals are left alone.
pub fn add_www(url: &mut ParsedUrl) {
    if url.host_is_ip() {
        return;
    }
    if let Some(host) = url.host.as_mut() {
        if !host.is_empty() && !has_www_prefix(host) {
            host.insert_str(0, "www.");
        }
    }
}

fn has_www_prefix(host: &str) -> bool {
    host.get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("www."))
}
