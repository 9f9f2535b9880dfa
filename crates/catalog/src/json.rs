//! JSON catalog loading and writing.
//!
//! The catalog on disk is a single JSON array of movie objects:
//!
//! ```json
//! [
//!   {
//!     "title": "The Gold Rush",
//!     "year": 1925,
//!     "cast": ["Charlie Chaplin", "Mack Swain"],
//!     "genres": ["Comedy"]
//!   }
//! ]
//! ```
//!
//! Loading the source file and writing the filtered result are the only
//! I/O in the system; everything between them operates on in-memory
//! collections.

use crate::error::{CatalogIoError, Result};
use crate::types::Movie;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse a JSON document into catalog records.
///
/// Split out from [`load_catalog`] so the binding can be exercised
/// without touching the filesystem.
pub fn parse_catalog(json: &str) -> Result<Vec<Movie>> {
    serde_json::from_str(json).map_err(|source| CatalogIoError::Parse { source })
}

/// Read and parse the catalog file at `path`.
pub fn load_catalog(path: &Path) -> Result<Vec<Movie>> {
    let json = fs::read_to_string(path).map_err(|source| CatalogIoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let movies = parse_catalog(&json)?;
    tracing::info!(count = movies.len(), path = %path.display(), "loaded movie catalog");

    Ok(movies)
}

/// Write the filtered movies to `path` as a pretty-printed JSON array.
///
/// The set carries no ordering, so records are sorted by year then title
/// first; repeated runs over the same catalog produce identical files.
/// An empty result set writes an empty array, it is not an error.
pub fn write_filtered(movies: &HashSet<Movie>, path: &Path) -> Result<()> {
    let mut ordered: Vec<&Movie> = movies.iter().collect();
    ordered.sort_by(|a, b| a.year.cmp(&b.year).then_with(|| a.title.cmp(&b.title)));

    let json = serde_json::to_string_pretty(&ordered)
        .map_err(|source| CatalogIoError::Serialize { source })?;
    fs::write(path, json).map_err(|source| CatalogIoError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(count = ordered.len(), path = %path.display(), "wrote filtered movies");

    Ok(())
}
