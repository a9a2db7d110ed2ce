//! Filter on the raw genre string.
//!
//! Genres such as "Crime/Drama" are never split: substring containment on
//! the whole string already matches any single slash-delimited token.

use super::{contains_folded, normalize_criterion};
use crate::traits::Filter;
use catalog::MovieRecord;

/// Keeps movies whose genre string contains the search text, ignoring case.
pub struct GenreFilter {
    needle: String,
}

impl GenreFilter {
    /// Create a filter for the given text (trimmed and lower-cased here).
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.trim().to_lowercase(),
        }
    }

    /// Build a filter from an optional criterion, `None` when blank.
    pub fn from_criterion(raw: Option<&str>) -> Option<Self> {
        normalize_criterion(raw).map(|needle| Self { needle })
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply<'a>(&self, movies: Vec<&'a MovieRecord>) -> Vec<&'a MovieRecord> {
        movies
            .into_iter()
            .filter(|movie| contains_folded(&movie.genre, &self.needle))
            .collect()
    }
}
