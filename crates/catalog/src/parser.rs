//! Parser for the JSON catalog source.
//!
//! The source is a JSON array of movie objects:
//! `[{"id": 1, "movieName": "...", "director": "...", "year": 1994,
//!   "genre": "Drama", "description": "...", "duration": 142,
//!   "imdbRating": 9.3}, ...]`
//!
//! Parsing is fail-fast: the first record that is missing a field, carries a
//! mistyped field, or breaks an invariant aborts the whole load.

use crate::error::{CatalogLoadError, Result};
use crate::types::MovieRecord;
use serde_json::Value;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Read the whole source file into memory.
///
/// A missing file is reported as `FileNotFound` so the caller sees the path.
pub fn read_source(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogLoadError::Io(e),
    })?;
    read_to_string(&mut file)
}

/// Drain a reader into a UTF-8 string
pub fn read_to_string<R: Read>(reader: &mut R) -> Result<String> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(content)
}

/// Parse a JSON document into movie records, preserving source order.
pub fn parse_movies(json: &str) -> Result<Vec<MovieRecord>> {
    let document: Value =
        serde_json::from_str(json).map_err(|e| CatalogLoadError::Malformed {
            reason: e.to_string(),
        })?;

    let Value::Array(entries) = document else {
        return Err(CatalogLoadError::Malformed {
            reason: "top-level value must be an array of movies".to_string(),
        });
    };

    if entries.is_empty() {
        return Err(CatalogLoadError::EmptySource);
    }

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| parse_record(index, entry))
        .collect()
}

/// Convert one JSON entry into a `MovieRecord` and check its invariants
fn parse_record(index: usize, entry: Value) -> Result<MovieRecord> {
    let record: MovieRecord =
        serde_json::from_value(entry).map_err(|e| CatalogLoadError::InvalidRecord {
            index,
            reason: e.to_string(),
        })?;
    validate_record(index, &record)?;
    Ok(record)
}

/// Check the invariants serde cannot express: ids are positive and every
/// movie has a visible name.
pub(crate) fn validate_record(index: usize, record: &MovieRecord) -> Result<()> {
    if record.id <= 0 {
        return Err(CatalogLoadError::InvalidValue {
            index,
            field: "id".to_string(),
            value: record.id.to_string(),
        });
    }
    if record.name.trim().is_empty() {
        return Err(CatalogLoadError::InvalidValue {
            index,
            field: "movieName".to_string(),
            value: record.name.clone(),
        });
    }
    Ok(())
}
