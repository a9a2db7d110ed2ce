//! Core traits for the search pipeline.
//!
//! This module defines the Filter trait that lets each search criterion be
//! applied as an independent, composable narrowing step.

use catalog::MovieRecord;

/// Core trait for narrowing a set of movies.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the Vec of borrowed records and return a
///   narrowed Vec, so records themselves are never cloned
/// - Filters must keep the relative order of the records they retain
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of movies.
    ///
    /// # Arguments
    /// * `movies` - The movies to narrow (takes ownership of the Vec)
    ///
    /// # Returns
    /// The movies that satisfy this filter, in their original order
    fn apply<'a>(&self, movies: Vec<&'a MovieRecord>) -> Vec<&'a MovieRecord>;
}
