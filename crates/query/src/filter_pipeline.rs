//! The FilterPipeline chains search filters.
//!
//! Filters run in insertion order, each one narrowing the output of the
//! previous one. Because every filter is a plain predicate over a different
//! field, the final set is the AND of all active filters.

use crate::traits::Filter;
use catalog::MovieRecord;
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(NameFilter::new("prison"))
///     .add_filter(GenreFilter::new("drama"));
///
/// let narrowed = pipeline.apply(catalog.movies().iter().collect());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Add a filter only when one was built for the criterion.
    ///
    /// Criteria that are absent or blank produce no filter at all.
    pub fn add_optional_filter(self, filter: Option<impl Filter + 'static>) -> Self {
        match filter {
            Some(filter) => self.add_filter(filter),
            None => self,
        }
    }

    /// Number of filters that will run
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the movies.
    pub fn apply<'a>(&self, movies: Vec<&'a MovieRecord>) -> Vec<&'a MovieRecord> {
        let mut current = movies;
        for filter in &self.filters {
            debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{GenreFilter, NameFilter};

    fn movie(id: i64, name: &str, genre: &str) -> MovieRecord {
        MovieRecord {
            id,
            name: name.to_string(),
            director: "Director".to_string(),
            release_year: 2000,
            genre: genre.to_string(),
            description: String::new(),
            duration_minutes: 100,
            rating: 7.0,
        }
    }

    #[test]
    fn test_empty_pipeline() {
        let movies = vec![movie(1, "A", "Drama"), movie(2, "B", "Comedy")];
        let pipeline = FilterPipeline::new();

        assert!(pipeline.is_empty());
        let filtered = pipeline.apply(movies.iter().collect());
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_filters_narrow_in_sequence() {
        let movies = vec![
            movie(1, "The Family Boss", "Crime/Drama"),
            movie(2, "Family Picnic", "Comedy"),
            movie(3, "The Wise Guys", "Crime/Drama"),
        ];

        let pipeline = FilterPipeline::new()
            .add_filter(NameFilter::new("family"))
            .add_filter(GenreFilter::new("crime"));
        assert_eq!(pipeline.len(), 2);

        let filtered = pipeline.apply(movies.iter().collect());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_optional_filter_skips_none() {
        let pipeline = FilterPipeline::new()
            .add_optional_filter(NameFilter::from_criterion(Some("   ")))
            .add_optional_filter(GenreFilter::from_criterion(Some("drama")));
        assert_eq!(pipeline.len(), 1);
    }
}
