mod output;

use anyhow::{anyhow, bail, Context, Result};
use catalog::Catalog;
use clap::{Parser, Subcommand};
use colored::Colorize;
use query::{MovieQueryEngine, SearchCriteria};
use rayon::prelude::*;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

use output::{print_genres, print_json, print_movie_details, print_movie_line, SearchResponse};

/// Movie catalog - lookup and search over a fixed movie collection
#[derive(Parser)]
#[command(name = "movie-catalog")]
#[command(about = "Look up and search a fixed catalog of movies", long_about = None)]
struct Cli {
    /// Path to the JSON movie catalog
    #[arg(short, long, env = "MOVIE_CATALOG_DATA", default_value = "data/movies.json")]
    data_file: PathBuf,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every movie in catalog order
    List,

    /// Show one movie by ID
    Get {
        /// Movie ID to display
        #[arg(long, allow_negative_numbers = true)]
        id: i64,
    },

    /// Search movies by name, ID and genre
    Search {
        /// Text the movie name must contain (case-insensitive)
        #[arg(long)]
        name: Option<String>,

        /// Exact movie ID; overrides name and genre when positive
        #[arg(long, allow_negative_numbers = true)]
        id: Option<i64>,

        /// Text the genre must contain (case-insensitive)
        #[arg(long)]
        genre: Option<String>,
    },

    /// List the distinct genres in the catalog
    Genres,

    /// Run benchmark to test search performance
    Benchmark {
        /// Number of searches to run
        #[arg(long, default_value = "1000")]
        requests: usize,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // The catalog must be complete before any query can run
    let catalog = Catalog::load_from_file(&cli.data_file).with_context(|| {
        format!("Failed to load movie catalog from {}", cli.data_file.display())
    })?;
    let engine = MovieQueryEngine::new(Arc::new(catalog));

    match cli.command {
        Commands::List => handle_list(&engine, cli.json)?,
        Commands::Get { id } => handle_get(&engine, id, cli.json)?,
        Commands::Search { name, id, genre } => {
            let criteria = SearchCriteria { name, id, genre };
            handle_search(&engine, &criteria, cli.json)?
        }
        Commands::Genres => handle_genres(&engine, cli.json)?,
        Commands::Benchmark { requests } => handle_benchmark(&engine, requests)?,
    }

    Ok(())
}

/// Handle the 'list' command
fn handle_list(engine: &MovieQueryEngine, json: bool) -> Result<()> {
    let movies = engine.get_all();
    let genres = engine.all_genres();

    if json {
        return print_json(&json!({ "movies": movies, "allGenres": genres }));
    }

    println!("{}", format!("{} movies:", movies.len()).bold().blue());
    for movie in movies {
        print_movie_line(movie);
    }
    println!();
    print_genres(&genres);
    Ok(())
}

/// Handle the 'get' command
fn handle_get(engine: &MovieQueryEngine, id: i64, json: bool) -> Result<()> {
    let movie = engine
        .get_by_id(Some(id))
        .ok_or_else(|| anyhow!("Movie with ID {} was not found.", id))?;

    if json {
        return print_json(movie);
    }
    print_movie_details(movie);
    Ok(())
}

/// Handle the 'search' command
fn handle_search(engine: &MovieQueryEngine, criteria: &SearchCriteria, json: bool) -> Result<()> {
    let results = engine.search(criteria);
    let response = SearchResponse::new(criteria, results);

    if json {
        return print_json(&response);
    }

    println!("{}", response.message.bold().blue());
    for movie in &response.movies {
        print_movie_line(movie);
    }
    Ok(())
}

/// Handle the 'genres' command
fn handle_genres(engine: &MovieQueryEngine, json: bool) -> Result<()> {
    let genres = engine.all_genres();
    if json {
        return print_json(&genres);
    }
    print_genres(&genres);
    Ok(())
}

/// Handle the 'benchmark' command
///
/// Searches run on the rayon pool against one shared engine, mixing name,
/// genre and id criteria drawn from the catalog itself.
fn handle_benchmark(engine: &MovieQueryEngine, requests: usize) -> Result<()> {
    if requests == 0 {
        bail!("--requests must be at least 1");
    }

    let movies = engine.get_all();
    let queries: Vec<SearchCriteria> = (0..requests)
        .map(|_| {
            let movie = &movies[rand::random::<u32>() as usize % movies.len()];
            match rand::random::<u8>() % 3 {
                0 => SearchCriteria::new().with_name(first_token(&movie.name, ' ')),
                1 => SearchCriteria::new().with_genre(first_token(&movie.genre, '/')),
                _ => SearchCriteria::new().with_id(movie.id),
            }
        })
        .collect();

    info!("Running {} searches on {} threads", requests, rayon::current_num_threads());
    let start = Instant::now();
    let mut timings: Vec<Duration> = queries
        .par_iter()
        .map(|criteria| {
            let started = Instant::now();
            let results = engine.search(criteria);
            std::hint::black_box(results.len());
            started.elapsed()
        })
        .collect();
    let wall_time = start.elapsed();

    timings.sort();
    let total: Duration = timings.iter().sum();
    let avg_latency = total / timings.len() as u32;
    let throughput = requests as f64 / wall_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Total time: {:?}", wall_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(&timings, 0.50));
    println!("P95 latency: {:?}", percentile(&timings, 0.95));
    println!("P99 latency: {:?}", percentile(&timings, 0.99));
    println!("Throughput: {:.2} searches/second", throughput);

    Ok(())
}

/// First non-empty token of `text`, or the whole text
fn first_token(text: &str, separator: char) -> String {
    text.split(separator)
        .find(|token| !token.trim().is_empty())
        .unwrap_or(text)
        .to_string()
}

/// Value at quantile `q` of an ascending slice
fn percentile(sorted: &[Duration], q: f64) -> Duration {
    let pos = ((sorted.len() as f64 * q) as usize).min(sorted.len().saturating_sub(1));
    sorted.get(pos).copied().unwrap_or_default()
}
