//! The catalog store.
//!
//! The only component holding a reference to the full movie set; answers
//! decade-scoped queries over it.

use crate::decade;
use crate::error::{FilterError, Result};
use crate::validator;
use catalog::Movie;
use std::collections::HashSet;

/// Owns the full, deduplicated movie catalog.
///
/// The store takes ownership of its records at construction and never
/// mutates them afterwards, so concurrent readers need no locking and
/// every scan sees the same catalog.
#[derive(Debug)]
pub struct CatalogStore {
    movies: HashSet<Movie>,
}

impl CatalogStore {
    /// Build a store over the supplied records.
    ///
    /// The records are collected into an owned set: duplicates collapse
    /// under `Movie` equality, and nothing the caller later does to its
    /// own collection can reach the stored copy.
    ///
    /// # Errors
    /// [`FilterError::EmptyCatalog`] if the input yields no records.
    pub fn new(movies: impl IntoIterator<Item = Movie>) -> Result<Self> {
        let movies: HashSet<Movie> = movies.into_iter().collect();
        if movies.is_empty() {
            return Err(FilterError::EmptyCatalog);
        }

        Ok(Self { movies })
    }

    /// The movies released in `[decade, next_decade(decade))`.
    ///
    /// Validates `decade` before scanning and fails fast on a bad value;
    /// no partial result is produced. An empty result set is a valid
    /// outcome, not an error.
    pub fn find_by_decade(&self, decade: i32) -> Result<HashSet<Movie>> {
        validator::validate(decade)?;

        let upper = decade::next_decade(decade);
        let matched: HashSet<Movie> = self
            .movies
            .iter()
            .filter(|movie| movie.year >= decade && movie.year < upper)
            .cloned()
            .collect();
        tracing::debug!(
            decade,
            matched = matched.len(),
            scanned = self.movies.len(),
            "decade scan complete"
        );

        Ok(matched)
    }

    /// The number of distinct movies in the catalog.
    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }
}
