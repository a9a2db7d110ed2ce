//! Catalog building and indexing logic.
//!
//! This module turns parsed records into the immutable `Catalog`:
//! - Keep source order for default listing
//! - Build the id index once, last record wins on duplicate ids
//! - Drop the shadowed duplicates so listing and lookup always agree

use crate::error::Result;
use crate::parser;
use crate::types::*;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

impl Catalog {
    /// Load the catalog from a JSON file
    ///
    /// This is the main entry point for process startup. Any failure leaves
    /// the caller with no catalog at all.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie catalog from {}", path.display());

        let content = parser::read_source(path)?;
        let catalog = Self::from_json_str(&content)?;

        info!("Movie catalog loaded: {} movies", catalog.len());
        Ok(catalog)
    }

    /// Build the catalog from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let movies = parser::parse_movies(json)?;
        Ok(Self::build(movies))
    }

    /// Build the catalog from any reader yielding JSON
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let content = parser::read_to_string(&mut reader)?;
        Self::from_json_str(&content)
    }

    /// Build the catalog from records that are already in memory
    ///
    /// Records go through the same validation as the JSON path, and an empty
    /// list is refused just like an empty source.
    pub fn from_records(movies: Vec<MovieRecord>) -> Result<Self> {
        if movies.is_empty() {
            return Err(crate::error::CatalogLoadError::EmptySource);
        }
        for (index, movie) in movies.iter().enumerate() {
            parser::validate_record(index, movie)?;
        }
        Ok(Self::build(movies))
    }

    /// Index records by id and drop any record shadowed by a later duplicate
    fn build(movies: Vec<MovieRecord>) -> Self {
        // Last occurrence of each id wins
        let mut last_seen: HashMap<MovieId, usize> = HashMap::with_capacity(movies.len());
        for (pos, movie) in movies.iter().enumerate() {
            if let Some(previous) = last_seen.insert(movie.id, pos) {
                warn!(
                    "Duplicate movie id {} at positions {} and {}, keeping the later record",
                    movie.id, previous, pos
                );
            }
        }

        let movies: Vec<MovieRecord> = movies
            .into_iter()
            .enumerate()
            .filter(|(pos, movie)| last_seen.get(&movie.id) == Some(pos))
            .map(|(_, movie)| movie)
            .collect();

        let id_index = movies
            .iter()
            .enumerate()
            .map(|(pos, movie)| (movie.id, pos))
            .collect();

        Self { movies, id_index }
    }
}
