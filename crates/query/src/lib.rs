//! Query engine for the movie catalog.
//!
//! This crate provides:
//! - MovieQueryEngine with lookup, listing, genre and search operations
//! - SearchCriteria describing a search request
//! - Filter trait and implementations for name and genre matching
//! - FilterPipeline for composing filters
//!
//! ## Architecture
//! A search runs in stages:
//! 1. A positive id short-circuits to a single index lookup
//! 2. Otherwise the whole catalog flows through the FilterPipeline
//! 3. Each active filter narrows the set, keeping catalog order
//!
//! ## Example Usage
//! ```ignore
//! use query::{MovieQueryEngine, SearchCriteria};
//! use catalog::Catalog;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::load_from_file(Path::new("data/movies.json"))?);
//! let engine = MovieQueryEngine::new(catalog);
//!
//! let results = engine.search(&SearchCriteria::new().with_name("family").with_genre("crime"));
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod criteria;
pub mod engine;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use criteria::SearchCriteria;
pub use engine::MovieQueryEngine;
