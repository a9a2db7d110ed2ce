//! # Movie Query Engine
//!
//! Read-only operations over the loaded catalog:
//! 1. List every movie in source order
//! 2. Look up a movie by id
//! 3. Multi-criteria search (id override, then name AND genre)
//! 4. List the distinct raw genre strings
//!
//! The engine holds the catalog behind an `Arc` and never mutates it, so a
//! single engine (or any number of clones) can serve concurrent callers
//! without locks.

use std::collections::BTreeSet;
use std::sync::Arc;

use catalog::{Catalog, MovieId, MovieRecord};
use tracing::{info, instrument, warn};

use crate::criteria::SearchCriteria;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{GenreFilter, NameFilter};

/// Query engine over an immutable movie catalog
#[derive(Debug, Clone)]
pub struct MovieQueryEngine {
    /// Shared reference to the catalog (read-only, so no Mutex needed)
    catalog: Arc<Catalog>,
}

impl MovieQueryEngine {
    /// Create an engine over an already loaded catalog
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// The underlying catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Every movie in source order
    pub fn get_all(&self) -> &[MovieRecord] {
        self.catalog.movies()
    }

    /// Look up a movie by id.
    ///
    /// Absent and non-positive ids mean "no identifier supplied" and yield
    /// `None`, the same as an id that is not in the catalog.
    pub fn get_by_id(&self, id: Option<i64>) -> Option<&MovieRecord> {
        let id: MovieId = id.filter(|&id| id > 0)?;
        self.catalog.get_movie(id)
    }

    /// Search the catalog.
    ///
    /// ## Algorithm
    /// 1. A present, positive `id` short-circuits: the result is that movie
    ///    alone, or nothing when the id is unknown. `name` and `genre` are
    ///    not looked at.
    /// 2. Otherwise start from the whole catalog and narrow by name, then by
    ///    genre. Blank criteria add no filter.
    /// 3. Catalog order is preserved.
    #[instrument(skip(self))]
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&MovieRecord> {
        if let Some(id) = criteria.lookup_id() {
            return match self.get_by_id(Some(id)) {
                Some(movie) => {
                    info!("Found movie by id {}", id);
                    vec![movie]
                }
                None => {
                    warn!("No movie found with id {}", id);
                    Vec::new()
                }
            };
        }

        let pipeline = FilterPipeline::new()
            .add_optional_filter(NameFilter::from_criterion(criteria.name.as_deref()))
            .add_optional_filter(GenreFilter::from_criterion(criteria.genre.as_deref()));

        let results = pipeline.apply(self.catalog.movies().iter().collect());
        info!("Search complete, found {} movies", results.len());
        results
    }

    /// Search by name only
    pub fn search_by_name(&self, name: &str) -> Vec<&MovieRecord> {
        self.search(&SearchCriteria::new().with_name(name))
    }

    /// Search by genre only
    pub fn search_by_genre(&self, genre: &str) -> Vec<&MovieRecord> {
        self.search(&SearchCriteria::new().with_genre(genre))
    }

    /// Distinct raw genre strings, sorted ascending.
    ///
    /// Slash-delimited values are kept whole, so "Crime/Drama" and "Drama"
    /// are two separate entries.
    pub fn all_genres(&self) -> Vec<&str> {
        self.catalog
            .movies()
            .iter()
            .map(|movie| movie.genre.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
