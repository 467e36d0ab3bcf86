//! Splitting URL text into raw RFC 3986 components.
//!
//! `fluent_uri` validates the text against the `URI-reference` grammar and
//! hands back slices of the input. Unlike `url::Url::parse`, nothing is
//! rewritten: scheme and host keep their case, ports stay textual and dot
//! segments stay in the path. That leaves every canonicalization to the
//! normalization rules.

use std::str::FromStr;

use fluent_uri::Uri;

use crate::error::UrlnormError;
use crate::types::ParsedUrl;

/// Parse URL text into its raw components.
///
/// Accepts absolute URLs and relative references. Fails on control
/// characters, a leading `:` and anything else outside the RFC 3986
/// grammar (malformed `%XX`, bad IP literals, non-numeric ports, ...).
///
/// # Examples
///
/// ```
/// use urlnorm::parse_url;
///
/// let url = parse_url("HTTP://User@Example.COM:80/a/./b?q=1#top").unwrap();
/// assert_eq!(url.scheme.as_deref(), Some("HTTP"));
/// assert_eq!(url.host.as_deref(), Some("Example.COM"));
/// assert_eq!(url.port.as_deref(), Some("80"));
/// assert_eq!(url.path, "/a/./b");
/// ```
pub fn parse_url(input: &str) -> Result<ParsedUrl, UrlnormError> {
    if input.chars().any(|c| c.is_ascii_control()) {
        return Err(UrlnormError::ControlCharacter);
    }
    if input.starts_with(':') {
        return Err(UrlnormError::MissingScheme);
    }

    let uri = Uri::parse(input).map_err(|err| UrlnormError::ParseError(err.to_string()))?;

    let mut url = ParsedUrl {
        scheme: uri.scheme().map(|scheme| scheme.as_str().to_string()),
        path: uri.path().as_str().to_string(),
        query: uri.query().map(|query| query.as_str().to_string()),
        fragment: uri.fragment().map(|fragment| fragment.as_str().to_string()),
        ..ParsedUrl::default()
    };

    if let Some(authority) = uri.authority() {
        url.userinfo = authority.userinfo().map(|userinfo| userinfo.as_str().to_string());
        url.host = Some(authority.host().to_string());
        url.port = authority.port().map(str::to_string);
    }

    Ok(url)
}

impl ParsedUrl {
    /// Parse URL text, see [`parse_url`].
    pub fn parse(input: &str) -> Result<Self, UrlnormError> {
        parse_url(input)
    }
}

impl FromStr for ParsedUrl {
    type Err = UrlnormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_url(s)
    }
}
