//! # Catalog Crate
//!
//! This crate handles loading and persisting the movie catalog.
//!
//! ## Main Components
//!
//! - **types**: the `Movie` record the rest of the system filters
//! - **json**: JSON file loading and writing
//! - **error**: error types for catalog I/O
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{load_catalog, write_filtered};
//! use std::path::Path;
//!
//! // Load the full catalog
//! let movies = load_catalog(Path::new("movies.json"))?;
//!
//! // ... filter to a decade (see the filter crate) ...
//!
//! // Persist the subset
//! write_filtered(&filtered, Path::new("out/1980s-movies.json"))?;
//! ```

// Public modules
pub mod error;
pub mod json;
pub mod types;

// Re-export commonly used items for convenience
pub use error::{CatalogIoError, Result};
pub use json::{load_catalog, parse_catalog, write_filtered};
pub use types::Movie;
