//! Core domain types for the movie catalog.
//!
//! This module defines the record type served by the catalog and the
//! in-memory snapshot that owns every record plus the identifier index.
//! - Type aliases for domain clarity (MovieId)
//! - Serde renames that map the JSON source names onto Rust field names
//! - HashMap for O(1) identifier lookups

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie (always >= 1 once loaded)
pub type MovieId = i64;

// =============================================================================
// Movie Record
// =============================================================================

/// A single movie as it appears in the catalog source.
///
/// Every field is required when deserializing: serde rejects a record that
/// omits one or carries the wrong JSON type for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    #[serde(rename = "movieName")]
    pub name: String,
    pub director: String,
    #[serde(rename = "year")]
    pub release_year: i32,
    /// Raw genre string, possibly slash-delimited ("Crime/Drama").
    ///
    /// Matched and listed as one opaque value, never split into tokens.
    pub genre: String,
    pub description: String,
    #[serde(rename = "duration")]
    pub duration_minutes: i32,
    /// Rating on a 0.0 - 10.0 scale
    #[serde(rename = "imdbRating")]
    pub rating: f64,
}

// =============================================================================
// Catalog - The Immutable In-Memory Snapshot
// =============================================================================

/// Owns every loaded movie in source order plus the identifier index.
///
/// A `Catalog` is only ever produced by the loader (see `index.rs`) and is
/// never mutated afterwards, so it can be shared across threads behind an
/// `Arc` without any locking.
#[derive(Debug)]
pub struct Catalog {
    /// Movies in source order
    pub(crate) movies: Vec<MovieRecord>,
    /// Position of each movie inside `movies`, keyed by id
    pub(crate) id_index: HashMap<MovieId, usize>,
}

impl Catalog {
    /// All movies in source order
    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    /// Get a movie by ID
    ///
    /// Returns `None` if no movie carries this id.
    pub fn get_movie(&self, id: MovieId) -> Option<&MovieRecord> {
        self.id_index.get(&id).map(|&pos| &self.movies[pos])
    }

    /// Number of movies in the catalog
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
