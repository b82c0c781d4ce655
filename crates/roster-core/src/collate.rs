//! String ordering used wherever records are compared.
//!
//! The ordering compares case-insensitively first (Unicode lowercase
//! mapping) and breaks exact ties by code-point order, so "amy" sorts
//! before "Bob" and the result is total and identical on every platform.

use std::cmp::Ordering;

/// Compare two strings case-insensitively, falling back to code-point
/// order for strings that are equal under lowercasing.
pub fn collate(a: &str, b: &str) -> Ordering {
  a.chars()
    .flat_map(char::to_lowercase)
    .cmp(b.chars().flat_map(char::to_lowercase))
    .then_with(|| a.cmp(b))
}
