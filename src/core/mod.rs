//! Core URL normalization functionality.
//!
//! This module contains the rule engine:
//! - The ordered rule table and its dispatcher
//! - Scheme, host and port rules
//! - Numeric host decoders
//! - Percent-escape rules
//! - Path, query and fragment rules

pub mod authority;
pub mod escapes;
pub mod host_encoding;
pub mod normalizer;
pub mod path;
pub mod query;

// Re-export main functionality
pub use normalizer::{
    apply_rules, must_normalize_url, must_normalize_url_str, normalize_url, normalize_url_str,
    selected_rules, Normalizer, Rule, RuleFn, RULES,
};
