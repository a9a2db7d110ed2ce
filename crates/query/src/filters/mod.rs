//! Filter implementations for the search pipeline.
//!
//! Each text criterion gets its own filter. Both share the same matching
//! rules: the search text is trimmed, both sides are lower-cased, and a
//! record matches when its field contains the text as a substring.

pub mod genre;
pub mod name;

// Re-export for convenience
pub use genre::GenreFilter;
pub use name::NameFilter;

/// Normalize a raw text criterion.
///
/// Returns `None` when the criterion is absent, empty, or whitespace-only,
/// which means "not supplied". Otherwise returns the trimmed, lower-cased
/// text. Inner whitespace is left untouched.
pub fn normalize_criterion(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Case-insensitive substring test against an already lower-cased needle
pub(crate) fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    haystack.to_lowercase().contains(folded_needle)
}
