//! Filter on the movie name.

use super::{contains_folded, normalize_criterion};
use crate::traits::Filter;
use catalog::MovieRecord;

/// Keeps movies whose name contains the search text, ignoring case.
pub struct NameFilter {
    needle: String,
}

impl NameFilter {
    /// Create a filter for the given text (trimmed and lower-cased here).
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.trim().to_lowercase(),
        }
    }

    /// Build a filter from an optional criterion.
    ///
    /// Absent or blank criteria yield `None` so nothing gets filtered out.
    pub fn from_criterion(raw: Option<&str>) -> Option<Self> {
        normalize_criterion(raw).map(|needle| Self { needle })
    }
}

impl Filter for NameFilter {
    fn name(&self) -> &str {
        "NameFilter"
    }

    fn apply<'a>(&self, movies: Vec<&'a MovieRecord>) -> Vec<&'a MovieRecord> {
        movies
            .into_iter()
            .filter(|movie| contains_folded(&movie.name, &self.needle))
            .collect()
    }
}
