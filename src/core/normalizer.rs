//! The rule dispatcher: runs the enabled rules in one fixed order.
//!
//! Rule effects do not commute, so the table below is the single source of
//! truth for ordering:
//!
//! 1. host encodings, so later rules see a canonical host
//! 2. scheme and host case
//! 3. escapes, before any rule that looks at path or query text
//! 4. default and empty ports, then force-http (port removal depends on the
//!    original scheme)
//! 5. path rules, with trailing-slash handling last so it sees the final path
//!
//! When both rules of a mutually exclusive pair are enabled (add/remove
//! trailing slash, add/remove www) the later one in the table wins.

use tracing::{debug, trace};

use crate::core::{authority, escapes, host_encoding, path, query};
use crate::error::UrlnormError;
use crate::flags::NormalizationFlags;
use crate::types::ParsedUrl;
use crate::url::parser::parse_url;

/// How a rule mutates the URL.
#[derive(Clone, Copy)]
pub enum RuleFn {
    /// Cannot fail on a well-formed [`ParsedUrl`].
    Total(fn(&mut ParsedUrl)),
    /// Re-reads escapes and may find invalid ones.
    Fallible(fn(&mut ParsedUrl) -> Result<(), UrlnormError>),
}

/// One normalization rule, keyed by the flag enabling it.
#[derive(Clone, Copy)]
pub struct Rule {
    pub flag: NormalizationFlags,
    pub name: &'static str,
    pub apply: RuleFn,
}

impl Rule {
    const fn total(flag: NormalizationFlags, name: &'static str, f: fn(&mut ParsedUrl)) -> Self {
        Self { flag, name, apply: RuleFn::Total(f) }
    }

    const fn fallible(
        flag: NormalizationFlags,
        name: &'static str,
        f: fn(&mut ParsedUrl) -> Result<(), UrlnormError>,
    ) -> Self {
        Self { flag, name, apply: RuleFn::Fallible(f) }
    }

    /// Apply the rule unconditionally.
    pub fn run(&self, url: &mut ParsedUrl) -> Result<(), UrlnormError> {
        match self.apply {
            RuleFn::Total(f) => {
                f(url);
                Ok(())
            }
            RuleFn::Fallible(f) => f(url),
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("flag", &self.flag.bits())
            .finish()
    }
}

type F = NormalizationFlags;

/// Every rule, in execution order.
pub const RULES: &[Rule] = &[
    Rule::total(F::DECODE_DWORD_HOST, "decode-dword-host", host_encoding::decode_dword_host),
    Rule::total(F::DECODE_OCTAL_HOST, "decode-octal-host", host_encoding::decode_octal_host),
    Rule::total(F::DECODE_HEX_HOST, "decode-hex-host", host_encoding::decode_hex_host),
    Rule::total(
        F::REMOVE_UNNECESSARY_HOST_DOTS,
        "remove-unnecessary-host-dots",
        host_encoding::remove_unnecessary_host_dots,
    ),
    Rule::total(F::LOWERCASE_SCHEME, "lowercase-scheme", authority::lowercase_scheme),
    Rule::total(F::LOWERCASE_HOST, "lowercase-host", authority::lowercase_host),
    Rule::fallible(F::UPPERCASE_ESCAPES, "uppercase-escapes", escapes::uppercase_escapes),
    Rule::fallible(
        F::DECODE_UNNECESSARY_ESCAPES,
        "decode-unnecessary-escapes",
        escapes::decode_unnecessary_escapes,
    ),
    Rule::total(F::REMOVE_DEFAULT_PORT, "remove-default-port", authority::remove_default_port),
    Rule::total(
        F::REMOVE_EMPTY_PORT_SEPARATOR,
        "remove-empty-port-separator",
        authority::remove_empty_port_separator,
    ),
    Rule::total(F::FORCE_HTTP, "force-http", authority::force_http),
    Rule::total(F::REMOVE_DIRECTORY_INDEX, "remove-directory-index", path::remove_directory_index),
    Rule::total(F::REMOVE_DOT_SEGMENTS, "remove-dot-segments", path::remove_dot_segments),
    Rule::total(
        F::REMOVE_DUPLICATE_SLASHES,
        "remove-duplicate-slashes",
        path::remove_duplicate_slashes,
    ),
    Rule::total(F::REMOVE_FRAGMENT, "remove-fragment", query::remove_fragment),
    Rule::total(F::REMOVE_WWW, "remove-www", authority::remove_www),
    Rule::total(F::ADD_WWW, "add-www", authority::add_www),
    Rule::total(F::SORT_QUERY, "sort-query", query::sort_query),
    Rule::total(
        F::REMOVE_EMPTY_QUERY_SEPARATOR,
        "remove-empty-query-separator",
        query::remove_empty_query_separator,
    ),
    Rule::total(F::REMOVE_TRAILING_SLASH, "remove-trailing-slash", path::remove_trailing_slash),
    Rule::total(F::ADD_TRAILING_SLASH, "add-trailing-slash", path::add_trailing_slash),
];

/// The rules `flags` enables, in the order they run.
pub fn selected_rules(flags: NormalizationFlags) -> impl Iterator<Item = &'static Rule> {
    RULES.iter().filter(move |rule| flags.contains(rule.flag))
}

/// Apply the enabled rules to `url` in place.
///
/// Stops at the first failing rule; `url` may then be partly normalized and
/// should be discarded.
pub fn apply_rules(url: &mut ParsedUrl, flags: NormalizationFlags) -> Result<(), UrlnormError> {
    for rule in selected_rules(flags) {
        rule.run(url)?;
        trace!(rule = rule.name, url = %url, "applied normalization rule");
    }
    Ok(())
}

/// Normalize an already parsed URL in place and return its text.
///
/// # Examples
///
/// ```
/// use urlnorm::{normalize_url, NormalizationFlags, ParsedUrl};
///
/// let mut url = ParsedUrl::parse("Http://SomeUrl.com:8080/a/b/.././c///g?c=3&a=1&b=9&c=0#target")?;
/// let flags = NormalizationFlags::USUALLY_SAFE
///     | NormalizationFlags::REMOVE_DUPLICATE_SLASHES
///     | NormalizationFlags::REMOVE_FRAGMENT;
///
/// let normalized = normalize_url(&mut url, flags)?;
/// assert_eq!(normalized, "http://someurl.com:8080/a/c/g?c=3&a=1&b=9&c=0");
/// assert_eq!(url.fragment, None);
/// # Ok::<(), urlnorm::UrlnormError>(())
/// ```
pub fn normalize_url(url: &mut ParsedUrl, flags: NormalizationFlags) -> Result<String, UrlnormError> {
    apply_rules(url, flags)?;
    let normalized = url.to_string();
    debug!(flags = %flags, normalized = %normalized, "normalized URL");
    Ok(normalized)
}

/// Parse URL text, then normalize it.
///
/// Parse errors are returned before any rule runs.
///
/// # Examples
///
/// ```
/// use urlnorm::{normalize_url_str, NormalizationFlags};
///
/// let flags = NormalizationFlags::LOWERCASE_SCHEME
///     | NormalizationFlags::LOWERCASE_HOST
///     | NormalizationFlags::UPPERCASE_ESCAPES;
/// let normalized = normalize_url_str("hTTp://someWEBsite.com:80/Amazing%3f/url/", flags)?;
/// assert_eq!(normalized, "http://somewebsite.com:80/Amazing%3F/url/");
/// # Ok::<(), urlnorm::UrlnormError>(())
/// ```
pub fn normalize_url_str(input: &str, flags: NormalizationFlags) -> Result<String, UrlnormError> {
    let mut url = parse_url(input)?;
    normalize_url(&mut url, flags)
}

/// Like [`normalize_url_str`], but panics on error.
pub fn must_normalize_url_str(input: &str, flags: NormalizationFlags) -> String {
    match normalize_url_str(input, flags) {
        Ok(normalized) => normalized,
        Err(err) => panic!("failed to normalize {input:?}: {err}"),
    }
}

/// Like [`normalize_url`], but panics on error.
pub fn must_normalize_url(url: &mut ParsedUrl, flags: NormalizationFlags) -> String {
    match normalize_url(url, flags) {
        Ok(normalized) => normalized,
        Err(err) => panic!("failed to normalize URL: {err}"),
    }
}

/// A reusable normalizer bound to one set of flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    flags: NormalizationFlags,
}

impl Normalizer {
    pub fn new(flags: NormalizationFlags) -> Self {
        Self { flags }
    }

    pub fn flags(&self) -> NormalizationFlags {
        self.flags
    }

    /// Normalize URL text using this normalizer's flags.
    pub fn normalize_str(&self, input: &str) -> Result<String, UrlnormError> {
        normalize_url_str(input, self.flags)
    }

    /// Normalize a parsed URL in place using this normalizer's flags.
    pub fn normalize(&self, url: &mut ParsedUrl) -> Result<String, UrlnormError> {
        normalize_url(url, self.flags)
    }
}

/// Uses [`NormalizationFlags::SAFE`].
impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizationFlags::SAFE)
    }
}
