//! Decade filtering core for the movie catalog.
//!
//! This crate provides:
//! - Decade boundary arithmetic (`decade`)
//! - Decade validation (`validator`)
//! - The catalog store answering decade-scoped queries (`store`)
//! - The filter service façade the CLI calls (`service`)
//!
//! ## Architecture
//! One request/response cycle per invocation:
//! 1. `FilterService::filter(decade)` hands the query to the store
//! 2. The store validates the decade, then scans the owned catalog
//! 3. The matching movies come back as an owned set
//!
//! ## Example Usage
//! ```ignore
//! use filter::{CatalogStore, FilterService};
//!
//! let store = CatalogStore::new(movies)?;
//! let service = FilterService::new(Some(store))?;
//!
//! // Every movie released 1980-1989
//! let eighties = service.filter(1980)?;
//! ```

pub mod decade;
pub mod error;
pub mod service;
pub mod store;
pub mod validator;

// Re-export main types
pub use error::{FilterError, Result};
pub use service::FilterService;
pub use store::CatalogStore;
