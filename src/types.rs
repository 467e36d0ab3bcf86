//! Core data structures shared by the parser, the rules and the serializer.

/// A URL split into its RFC 3986 components.
///
/// Every text field holds the raw, still percent-encoded text of the
/// component, exactly as it appeared in the input. Normalization rules mutate
/// these fields in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedUrl {
    /// Scheme without the trailing `:` (e.g. "https"); `None` for relative references
    pub scheme: Option<String>,
    /// Userinfo without the trailing `@` (e.g. "user:pass")
    pub userinfo: Option<String>,
    /// Host, `Some` whenever the URL has an authority (may be empty, as in `file:///`).
    /// IPv6 literals keep their brackets.
    pub host: Option<String>,
    /// Port digits without the `:`; `Some("")` for an empty port separator
    pub port: Option<String>,
    /// Path, possibly empty
    pub path: String,
    /// Query without the leading `?`; `Some("")` for a bare `?`
    pub query: Option<String>,
    /// Fragment without the leading `#`
    pub fragment: Option<String>,
}

impl ParsedUrl {
    /// Check if the URL has an authority (`//host`).
    pub fn has_authority(&self) -> bool {
        self.host.is_some()
    }

    /// Check if the path is hierarchical, i.e. made of `/`-separated segments.
    ///
    /// Opaque paths such as the `joe@example.com` of `mailto:joe@example.com`
    /// are not, and path rules leave them alone.
    pub fn has_hierarchical_path(&self) -> bool {
        self.has_authority() || self.scheme.is_none() || self.path.starts_with('/')
    }

    /// Check if the host is an IP literal (bracketed IPv6 or dotted IPv4).
    pub fn host_is_ip(&self) -> bool {
        match self.host.as_deref() {
            Some(host) => {
                host.starts_with('[') || host.parse::<std::net::Ipv4Addr>().is_ok()
            }
            None => false,
        }
    }
}

/// Convert a URL already parsed by the `url` crate.
///
/// The `url` crate applies WHATWG parsing, so the result is already partly
/// normalized (lowercase scheme and host, default port removed, dot segments
/// resolved); the remaining rules still apply.
impl From<&url::Url> for ParsedUrl {
    fn from(url: &url::Url) -> Self {
        let userinfo = if url.username().is_empty() && url.password().is_none() {
            None
        } else {
            let mut userinfo = url.username().to_string();
            if let Some(password) = url.password() {
                userinfo.push(':');
                userinfo.push_str(password);
            }
            Some(userinfo)
        };

        let host = if url.has_authority() {
            Some(url.host_str().unwrap_or("").to_string())
        } else {
            None
        };

        Self {
            scheme: Some(url.scheme().to_string()),
            userinfo,
            host,
            port: url.port().map(|port| port.to_string()),
            path: url.path().to_string(),
            query: url.query().map(str::to_string),
            fragment: url.fragment().map(str::to_string),
        }
    }
}
