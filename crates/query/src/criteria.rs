//! Search criteria accepted by the query engine.

use serde::{Deserialize, Serialize};

/// The three optional search criteria.
///
/// Values are stored exactly as the caller supplied them; trimming and
/// case-folding happen inside the filters. An `id` that is present and
/// positive overrides `name` and `genre` entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub name: Option<String>,
    pub id: Option<i64>,
    pub genre: Option<String>,
}

impl SearchCriteria {
    /// Criteria that match the whole catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build criteria from borrowed, optional parts
    pub fn from_parts(name: Option<&str>, id: Option<i64>, genre: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            id,
            genre: genre.map(str::to_string),
        }
    }

    /// Set the name criterion (builder pattern)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the identifier criterion
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the genre criterion
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// True when the caller supplied no criterion at all.
    ///
    /// Blank strings and non-positive ids still count as supplied here; this
    /// only distinguishes "nothing asked" from "asked and found nothing".
    pub fn is_unspecified(&self) -> bool {
        self.name.is_none() && self.id.is_none() && self.genre.is_none()
    }

    /// The identifier, if it is usable for a lookup (present and positive)
    pub fn lookup_id(&self) -> Option<i64> {
        self.id.filter(|&id| id > 0)
    }
}
