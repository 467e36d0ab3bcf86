//! URL text handling.
//!
//! This module contains the two collaborators of the rule engine:
//! - Splitting URL text into raw components without rewriting them
//! - Rendering the (possibly mutated) components back to text

pub mod parser;
pub mod serializer;

// Re-export main functionality
pub use parser::parse_url;
