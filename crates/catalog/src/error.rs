//! Error types for catalog I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing a catalog file.
#[derive(Error, Debug)]
pub enum CatalogIoError {
    /// The source file could not be read
    #[error("failed to read catalog file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source file is not a well-formed movie document
    #[error("catalog document is not a valid movie list")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    /// The filtered result could not be serialized
    #[error("failed to serialize the filtered movies")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    /// The destination file could not be written
    #[error("failed to write filtered movies to {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogIoError>;
