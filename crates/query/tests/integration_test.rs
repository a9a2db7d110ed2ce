//! Integration tests for the query engine.
//!
//! These tests load the bundled catalog from `data/movies.json` and check the
//! search rules end to end.

use catalog::{Catalog, MovieRecord};
use query::{MovieQueryEngine, SearchCriteria};
use std::path::Path;
use std::sync::Arc;

fn load_engine() -> MovieQueryEngine {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/movies.json");
    let catalog = Catalog::load_from_file(&path).expect("bundled catalog should load");
    MovieQueryEngine::new(Arc::new(catalog))
}

fn search(
    engine: &MovieQueryEngine,
    name: Option<&str>,
    id: Option<i64>,
    genre: Option<&str>,
) -> Vec<i64> {
    engine
        .search(&SearchCriteria::from_parts(name, id, genre))
        .iter()
        .map(|m| m.id)
        .collect()
}

fn all_ids(engine: &MovieQueryEngine) -> Vec<i64> {
    engine.get_all().iter().map(|m| m.id).collect()
}

#[test]
fn test_get_all_movies() {
    let engine = load_engine();
    assert_eq!(engine.get_all().len(), 12);
    assert_eq!(all_ids(&engine), (1..=12).collect::<Vec<i64>>());
}

#[test]
fn test_get_movie_by_id() {
    let engine = load_engine();

    let movie = engine.get_by_id(Some(1)).expect("movie 1 exists");
    assert_eq!(movie.name, "The Prison Escape");
    assert_eq!(movie.director, "John Director");

    assert!(engine.get_by_id(Some(999)).is_none());
    assert!(engine.get_by_id(None).is_none());
    assert!(engine.get_by_id(Some(0)).is_none());
    assert!(engine.get_by_id(Some(-1)).is_none());
}

#[test]
fn test_search_without_criteria_returns_catalog_in_order() {
    let engine = load_engine();
    assert_eq!(search(&engine, None, None, None), all_ids(&engine));
}

#[test]
fn test_blank_criteria_are_no_ops() {
    let engine = load_engine();
    let everything = all_ids(&engine);

    assert_eq!(search(&engine, Some(""), None, None), everything);
    assert_eq!(search(&engine, Some("   "), None, None), everything);
    assert_eq!(search(&engine, None, None, Some(" \t ")), everything);
    assert_eq!(search(&engine, Some(""), Some(0), Some("")), everything);
    assert_eq!(search(&engine, None, Some(-1), None), everything);
}

#[test]
fn test_search_by_name() {
    let engine = load_engine();

    let exact = engine.search_by_name("The Prison Escape");
    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].name, "The Prison Escape");

    let partial = engine.search_by_name("the");
    assert!(partial.len() >= 6);
    assert!(partial.iter().all(|m| m.name.to_lowercase().contains("the")));

    let hero = engine.search_by_name("hero");
    assert!(hero.iter().any(|m| m.name == "The Masked Hero"));

    assert!(engine.search_by_name("nonexistentmovie").is_empty());
}

#[test]
fn test_search_is_case_insensitive_and_trims() {
    let engine = load_engine();

    let upper = search(&engine, Some("PRISON"), None, None);
    let lower = search(&engine, Some("prison"), None, None);
    let title = search(&engine, Some("Prison"), None, None);
    let padded = search(&engine, Some("  prison  "), None, None);

    assert_eq!(upper, vec![1]);
    assert_eq!(upper, lower);
    assert_eq!(lower, title);
    assert_eq!(lower, padded);

    assert_eq!(
        search(&engine, None, None, Some("DRAMA")),
        search(&engine, None, None, Some("  drama  "))
    );
}

#[test]
fn test_search_by_genre() {
    let engine = load_engine();

    let drama = engine.search_by_genre("Drama");
    assert!(!drama.is_empty());
    assert!(drama.iter().all(|m| m.genre.to_lowercase().contains("drama")));

    let crime = engine.search_by_genre("crime");
    assert!(crime.len() >= 2);
    assert!(crime.iter().all(|m| m.genre.to_lowercase().contains("crime")));

    let action = engine.search_by_genre("Action");
    assert!(!action.is_empty());

    assert!(engine.search_by_genre("NonexistentGenre").is_empty());
}

#[test]
fn test_search_by_id() {
    let engine = load_engine();

    assert_eq!(search(&engine, None, Some(1), None), vec![1]);
    assert!(search(&engine, None, Some(999), None).is_empty());
    assert_eq!(
        search(&engine, Some("SomeOtherName"), Some(1), Some("SomeOtherGenre")),
        vec![1]
    );
}

#[test]
fn test_combined_criteria_are_conjunctive() {
    let engine = load_engine();

    let results: Vec<&MovieRecord> =
        engine.search(&SearchCriteria::new().with_name("family").with_genre("crime"));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "The Family Boss");

    // Narrowing by name and genre keeps catalog order
    let the_crime = search(&engine, Some("the"), None, Some("crime"));
    assert_eq!(the_crime, vec![2, 3, 8]);
}

#[test]
fn test_all_genres_sorted_and_unique() {
    let engine = load_engine();
    let genres = engine.all_genres();

    assert!(genres.contains(&"Action/Crime"));
    assert!(genres.contains(&"Drama"));
    assert!(genres.contains(&"Crime/Drama"));
    assert!(genres.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_concurrent_searches_share_one_catalog() {
    let engine = load_engine();
    let expected = search(&engine, Some("the"), None, Some("drama"));

    std::thread::scope(|scope| {
        for _ in 0..8 {
            let engine = engine.clone();
            let expected = &expected;
            scope.spawn(move || {
                for _ in 0..100 {
                    assert_eq!(&search(&engine, Some("the"), None, Some("drama")), expected);
                }
            });
        }
    });
}
