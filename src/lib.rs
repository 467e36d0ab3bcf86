//! urlnorm - Configurable URL normalization
//!
//! This crate rewrites URLs into a canonical textual form so that URLs naming
//! the same resource compare equal as strings.
//!
//! Each normalization is an independent rule enabled by one bit of
//! [`NormalizationFlags`]. Enabled rules always run in one fixed order, since
//! their effects do not commute (removing the default port depends on the
//! scheme, trailing-slash decisions depend on the final path, ...).
//!
//! # Features
//!
//! - **Case folding**: lowercase scheme and host, uppercase percent-escapes
//! - **Escape cleanup**: decode escapes of unreserved characters only
//! - **Path cleanup**: dot segments, duplicate slashes, trailing slash, directory index
//! - **Authority cleanup**: default and empty ports, `www.` prefix, numeric IPv4 hosts
//! - **Query sorting**: stable key/value ordering for deduplication
//! - **Presets**: [`NormalizationFlags::SAFE`], [`NormalizationFlags::USUALLY_SAFE`],
//!   [`NormalizationFlags::UNSAFE`] and their variants
//!
//! # Quick Start
//!
//! ```
//! use urlnorm::{normalize_url_str, NormalizationFlags};
//!
//! let normalized = normalize_url_str(
//!     "HTTP://www.Example.com:80/a/./b/../%7Euser/?b=2&a=1#top",
//!     NormalizationFlags::UNSAFE,
//! )?;
//! assert_eq!(normalized, "http://example.com/a/~user?a=1&b=2");
//!
//! // Flags can also be named, e.g. from configuration
//! let flags: NormalizationFlags = "safe, remove-fragment".parse()?;
//! assert_eq!(normalize_url_str("HTTP://Example.com/#x", flags)?, "http://example.com/");
//! # Ok::<(), urlnorm::UrlnormError>(())
//! ```
//!
//! # Rule Order
//!
//! | Step | Rules |
//! |------|-------|
//! | 1 | decode dword / octal / hex host, remove unnecessary host dots |
//! | 2 | lowercase scheme, lowercase host |
//! | 3 | uppercase escapes, decode unnecessary escapes |
//! | 4 | remove default port, remove empty port separator |
//! | 5 | force http |
//! | 6 | remove directory index |
//! | 7 | remove dot segments, remove duplicate slashes |
//! | 8 | remove fragment |
//! | 9 | remove www, add www |
//! | 10 | sort query, remove empty query separator |
//! | 11 | remove trailing slash, add trailing slash |
//!
//! # Error Handling
//!
//! All fallible functions return `Result<T, UrlnormError>`:
//!
//! - Parse errors (control characters, missing scheme, bad port, bad host,
//!   invalid `%XX`) are reported before any rule runs
//! - Escape rules fail on invalid `%XX` in a hand-built [`ParsedUrl`]
//! - No partial result is ever returned

// Re-export main normalization functions
pub use crate::core::{
    must_normalize_url, must_normalize_url_str, normalize_url, normalize_url_str, Normalizer,
};

// Re-export parsing
pub use crate::url::parse_url;

// Re-export public types
pub use error::UrlnormError;
pub use flags::NormalizationFlags;
pub use types::ParsedUrl;

// Module declarations
pub mod core;
pub mod error;
pub mod flags;
pub mod logging;
pub mod types;
pub mod url;
