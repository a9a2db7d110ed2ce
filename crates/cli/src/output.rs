//! Rendering of query results as colored text or JSON.

use catalog::MovieRecord;
use colored::Colorize;
use query::SearchCriteria;
use serde::Serialize;

/// JSON envelope returned by the `search` command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse<'a> {
    pub success: bool,
    pub movies: Vec<&'a MovieRecord>,
    pub count: usize,
    pub search_criteria: CriteriaEcho,
    pub message: String,
}

/// The criteria as the caller typed them, absent values rendered as ""
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CriteriaEcho {
    pub name: String,
    pub id: String,
    pub genre: String,
}

impl<'a> SearchResponse<'a> {
    pub fn new(criteria: &SearchCriteria, movies: Vec<&'a MovieRecord>) -> Self {
        let message = search_message(movies.len(), criteria);
        Self {
            success: true,
            count: movies.len(),
            movies,
            search_criteria: CriteriaEcho::from(criteria),
            message,
        }
    }
}

impl From<&SearchCriteria> for CriteriaEcho {
    fn from(criteria: &SearchCriteria) -> Self {
        Self {
            name: criteria.name.clone().unwrap_or_default(),
            id: criteria.id.map(|id| id.to_string()).unwrap_or_default(),
            genre: criteria.genre.clone().unwrap_or_default(),
        }
    }
}

/// Human-readable summary of a search
pub fn search_message(count: usize, criteria: &SearchCriteria) -> String {
    match count {
        0 if criteria.is_unspecified() => "Provide search criteria to find movies.".to_string(),
        0 => "No movies found matching your search criteria.".to_string(),
        1 => "Found 1 movie matching your search.".to_string(),
        n => format!("Found {} movies matching your search.", n),
    }
}

/// Print a JSON value to stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One-line summary of a movie
pub fn print_movie_line(movie: &MovieRecord) {
    println!(
        "{}: {} ({}) [{}] - {:.1}",
        movie.id.to_string().green(),
        movie.name.bold(),
        movie.release_year,
        movie.genre,
        movie.rating
    );
}

/// Every field of a movie
pub fn print_movie_details(movie: &MovieRecord) {
    println!("{}", format!("{} ({})", movie.name, movie.release_year).bold().blue());
    println!("{}ID: {}", "• ".green(), movie.id);
    println!("{}Director: {}", "• ".green(), movie.director);
    println!("{}Genre: {}", "• ".green(), movie.genre);
    println!("{}Duration: {} min", "• ".green(), movie.duration_minutes);
    println!("{}Rating: {:.1}", "• ".cyan(), movie.rating);
    println!("   {}", movie.description);
}

pub fn print_genres(genres: &[&str]) {
    println!("{}", "Genres:".bold().blue());
    for genre in genres {
        println!("  - {}", genre);
    }
}
