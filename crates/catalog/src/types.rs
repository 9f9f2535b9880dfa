//! Core domain types for the movie catalog.
//!
//! This module defines the record the rest of the system filters. A
//! catalog entry is a value: equality and hashing cover every field, so a
//! `HashSet<Movie>` deduplicates records by content rather than identity.

use serde::{Deserialize, Serialize};

/// One movie in the catalog.
///
/// Constructed once during catalog load and never mutated afterwards.
/// The `cast` and `genres` lists preserve the order the source document
/// supplied, and list equality is order-sensitive: two records with the
/// same members in a different order are different records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Movie {
    /// The movie title.
    pub title: String,
    /// The year the movie was released.
    ///
    /// Signed because the decade arithmetic downstream is total over
    /// negative years; the supported floor era is enforced at query time,
    /// not here.
    pub year: i32,
    /// The actors, in billing order. Some corpus entries omit the field.
    #[serde(default)]
    pub cast: Vec<String>,
    /// The genre labels, in supplied order.
    #[serde(default)]
    pub genres: Vec<String>,
}
