//! Error types for the decade filter core.
//!
//! Every variant is raised at the point of detection and propagated
//! unchanged to the caller. The core never retries, never substitutes a
//! default, and never returns a partial result on error.

use thiserror::Error;

/// Errors surfaced by the filter core.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FilterError {
    /// The supplied decade failed validation.
    ///
    /// Recoverable by the caller (e.g. re-prompt); retrying with the same
    /// value would fail identically.
    #[error("invalid decade {year}: {reason}")]
    InvalidDecade { year: i32, reason: &'static str },

    /// A catalog with zero records was supplied at construction.
    #[error("the catalog requires at least one movie")]
    EmptyCatalog,

    /// The filter service was built without a backing store.
    #[error("the filter service requires a backing store")]
    MissingStore,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, FilterError>;
