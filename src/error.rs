//! Error types for URL parsing and normalization.

use thiserror::Error;

/// Errors that can occur while parsing or normalizing a URL.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UrlnormError {
    /// The URL text does not match the RFC 3986 `URI-reference` grammar.
    #[error("URL parsing failed: {0}")]
    ParseError(String),

    /// The URL starts with `:` and therefore has an empty scheme.
    #[error("Missing protocol scheme")]
    MissingScheme,

    /// The URL contains an ASCII control character.
    #[error("Invalid control character in URL")]
    ControlCharacter,

    /// A rule re-reading percent-escapes met an invalid hex pair.
    #[error("Invalid percent-escape {escape:?} in {component}")]
    EscapeDecode {
        /// URL component the escape was found in (path, query, ...).
        component: &'static str,
        /// The offending text, starting at the `%`.
        escape: String,
    },

    /// A flag name in a configuration string is not known.
    #[error("Unknown normalization flag: {0}")]
    UnknownFlag(String),
}

impl UrlnormError {
    /// Whether the error was raised while parsing the URL text, before any
    /// normalization rule ran.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            UrlnormError::ParseError(_)
                | UrlnormError::MissingScheme
                | UrlnormError::ControlCharacter
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            UrlnormError::MissingScheme.to_string(),
            "Missing protocol scheme"
        );

        assert_eq!(
            UrlnormError::ParseError("unexpected character at index 4".to_string()).to_string(),
            "URL parsing failed: unexpected character at index 4"
        );

        let err = UrlnormError::EscapeDecode {
            component: "path",
            escape: "%zz".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid percent-escape \"%zz\" in path");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(UrlnormError::ControlCharacter, UrlnormError::ControlCharacter);
        assert_ne!(UrlnormError::ControlCharacter, UrlnormError::MissingScheme);
    }

    #[test]
    fn test_error_classification() {
        assert!(UrlnormError::ControlCharacter.is_parse_error());
        assert!(UrlnormError::ParseError("x".to_string()).is_parse_error());

        let decode = UrlnormError::EscapeDecode {
            component: "query",
            escape: "%1".to_string(),
        };
        assert!(!decode.is_parse_error());
        assert!(!UrlnormError::UnknownFlag("nope".to_string()).is_parse_error());
    }
}
