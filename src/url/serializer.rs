//! Rendering a [`ParsedUrl`] back to text.

use std::fmt;

use crate::types::ParsedUrl;

/// Writes the components back in RFC 3986 order, without re-escaping anything.
///
/// # Examples
///
/// ```
/// use urlnorm::ParsedUrl;
///
/// let url = ParsedUrl::parse("HTTP://Example.com:8080/a%2fb?q#f").unwrap();
/// assert_eq!(url.to_string(), "HTTP://Example.com:8080/a%2fb?q#f");
/// ```
impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}:")?;
        }

        match &self.host {
            Some(host) => {
                f.write_str("//")?;
                if let Some(userinfo) = &self.userinfo {
                    write!(f, "{userinfo}@")?;
                }
                f.write_str(host)?;
                if let Some(port) = &self.port {
                    write!(f, ":{port}")?;
                }
                if !self.path.is_empty() && !self.path.starts_with('/') {
                    f.write_str("/")?;
                }
            }
            None => {
                // A path starting with "//" would otherwise read back as an authority.
                if self.path.starts_with("//") {
                    f.write_str("//")?;
                }
            }
        }

        f.write_str(&self.path)?;

        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}
