//! Decoders for legacy numeric IPv4 host forms and superfluous host dots.
//!
//! Browsers accept `http://1113982867/`, `http://0x42660793/` and
//! `http://0102.0146.07.0223/` as `http://66.102.7.147/`. Each decoder only
//! rewrites a host made entirely of its own number syntax, and only when the
//! value fits an IPv4 address; anything else passes through unchanged.

use std::net::Ipv4Addr;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::ParsedUrl;

static DWORD_HOST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)(\.*)$").unwrap());
static OCTAL_HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[0-9]*)\.(0[0-9]*)\.(0[0-9]*)\.(0[0-9]*)(\.*)$").unwrap()
});
static HEX_HOST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0[xX]([0-9A-Fa-f]+)(\.*)$").unwrap());

/// `1113982867` becomes `66.102.7.147`; trailing dots are kept.
pub fn decode_dword_host(url: &mut ParsedUrl) {
    rewrite_host(url, decode_dword);
}

/// `0102.0146.07.0223` becomes `66.102.7.147`; trailing dots are kept.
pub fn decode_octal_host(url: &mut ParsedUrl) {
    rewrite_host(url, decode_octal);
}

/// `0x42660793` becomes `66.102.7.147`; trailing dots are kept.
pub fn decode_hex_host(url: &mut ParsedUrl) {
    rewrite_host(url, decode_hex);
}

/// Trim leading and trailing dots (`www.foo.com.` becomes `www.foo.com`).
///
/// A host made only of dots is left as is rather than emptied.
pub fn remove_unnecessary_host_dots(url: &mut ParsedUrl) {
    rewrite_host(url, |host| {
        if host.starts_with('[') {
            return None;
        }
        let trimmed = host.trim_matches('.');
        if trimmed.is_empty() || trimmed.len() == host.len() {
            None
        } else {
            Some(trimmed.to_string())
        }
    });
}

fn rewrite_host(url: &mut ParsedUrl, decode: impl Fn(&str) -> Option<String>) {
    if let Some(host) = url.host.as_mut() {
        if let Some(decoded) = decode(host) {
            *host = decoded;
        }
    }
}

fn decode_dword(host: &str) -> Option<String> {
    let caps = DWORD_HOST.captures(host)?;
    let dword: u32 = caps[1].parse().ok()?;
    Some(format!("{}{}", Ipv4Addr::from(dword), &caps[2]))
}

fn decode_octal(host: &str) -> Option<String> {
    let caps = OCTAL_HOST.captures(host)?;
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = u8::from_str_radix(&caps[i + 1], 8).ok()?;
    }
    Some(format!("{}{}", Ipv4Addr::from(octets), &caps[5]))
}

fn decode_hex(host: &str) -> Option<String> {
    let caps = HEX_HOST.captures(host)?;
    let dword = u32::from_str_radix(&caps[1], 16).ok()?;
    Some(format!("{}{}", Ipv4Addr::from(dword), &caps[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host_after(host: &str, rule: fn(&mut ParsedUrl)) -> String {
        let mut url = ParsedUrl {
            scheme: Some("http".to_string()),
            host: Some(host.to_string()),
            path: "/".to_string(),
            ..ParsedUrl::default()
        };
        rule(&mut url);
        url.host.unwrap()
    }

    #[test]
    fn test_dword_host() {
        assert_eq!(host_after("1113982867", decode_dword_host), "66.102.7.147");
        assert_eq!(host_after("1113982867.", decode_dword_host), "66.102.7.147.");
        assert_eq!(host_after("0", decode_dword_host), "0.0.0.0");
        assert_eq!(host_after("4294967295", decode_dword_host), "255.255.255.255");
    }

    #[test]
    fn test_dword_host_passthrough() {
        // Too large for IPv4
        assert_eq!(host_after("4294967296", decode_dword_host), "4294967296");
        assert_eq!(host_after("66.102.7.147", decode_dword_host), "66.102.7.147");
        assert_eq!(host_after("0x123.1113982867", decode_dword_host), "0x123.1113982867");
        assert_eq!(host_after("123abc", decode_dword_host), "123abc");
    }

    #[test]
    fn test_octal_host() {
        assert_eq!(host_after("0102.0146.07.0223", decode_octal_host), "66.102.7.147");
        assert_eq!(host_after("0102.0146.07.0223..", decode_octal_host), "66.102.7.147..");
        assert_eq!(host_after("0.0.0.0377", decode_octal_host), "0.0.0.255");
    }

    #[test]
    fn test_octal_host_passthrough() {
        // 8 is not an octal digit
        assert_eq!(host_after("0108.0146.07.0223", decode_octal_host), "0108.0146.07.0223");
        // 0400 overflows an octet
        assert_eq!(host_after("0400.0.0.0", decode_octal_host), "0400.0.0.0");
        assert_eq!(host_after("102.0146.07.0223", decode_octal_host), "102.0146.07.0223");
        assert_eq!(host_after("0102.0146.07", decode_octal_host), "0102.0146.07");
    }

    #[test]
    fn test_hex_host() {
        assert_eq!(host_after("0x42660793", decode_hex_host), "66.102.7.147");
        assert_eq!(host_after("0X42660793.", decode_hex_host), "66.102.7.147.");
    }

    #[test]
    fn test_hex_host_passthrough() {
        assert_eq!(host_after("0x123.1113982867", decode_hex_host), "0x123.1113982867");
        assert_eq!(host_after("0x1FFFFFFFF", decode_hex_host), "0x1FFFFFFFF");
        assert_eq!(host_after("0xg1", decode_hex_host), "0xg1");
        assert_eq!(host_after("example.com", decode_hex_host), "example.com");
    }

    #[test]
    fn test_remove_unnecessary_host_dots() {
        let rule = remove_unnecessary_host_dots;
        assert_eq!(host_after("www.foo.com.", rule), "www.foo.com");
        assert_eq!(host_after("..www.foo.com..", rule), "www.foo.com");
        assert_eq!(host_after("www.foo.com", rule), "www.foo.com");
        assert_eq!(host_after("...", rule), "...");
        assert_eq!(host_after("[::1]", rule), "[::1]");
    }

    #[test]
    fn test_missing_host_is_ignored() {
        let mut url = ParsedUrl {
            scheme: Some("mailto".to_string()),
            path: "1113982867".to_string(),
            ..ParsedUrl::default()
        };
        decode_dword_host(&mut url);
        assert_eq!(url.path, "1113982867");
        assert_eq!(url.host, None);
    }
}
