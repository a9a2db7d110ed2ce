//! # Catalog Crate
//!
//! This crate loads the movie catalog and indexes it for identifier lookups.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, Catalog)
//! - **parser**: Parse the JSON source into records
//! - **index**: Build the immutable catalog and its id index
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/movies.json"))?;
//!
//! let movie = catalog.get_movie(1).unwrap();
//! println!("{} ({})", movie.name, movie.release_year);
//! ```
//!
//! The catalog is built exactly once and never mutated, so it is shared
//! between callers as `Arc<Catalog>`.

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogLoadError, Result};
pub use types::{Catalog, MovieId, MovieRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_source_names() {
        let movie = MovieRecord {
            id: 1,
            name: "The Prison Escape".to_string(),
            director: "John Director".to_string(),
            release_year: 1994,
            genre: "Drama".to_string(),
            description: "Two men bond.".to_string(),
            duration_minutes: 142,
            rating: 9.3,
        };

        let value = serde_json::to_value(&movie).unwrap();
        assert_eq!(value["movieName"], "The Prison Escape");
        assert_eq!(value["year"], 1994);
        assert_eq!(value["duration"], 142);
        assert_eq!(value["imdbRating"], 9.3);
    }

    #[test]
    fn test_catalog_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
