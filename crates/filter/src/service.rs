//! The filter service.
//!
//! A thin façade over [`CatalogStore`]; the only entry point external
//! collaborators call.

use crate::error::{FilterError, Result};
use crate::store::CatalogStore;
use catalog::Movie;
use std::collections::HashSet;

/// Filters the catalog down to the movies released in one decade.
#[derive(Debug)]
pub struct FilterService {
    store: CatalogStore,
}

impl FilterService {
    /// Build the service over an already-constructed store.
    ///
    /// # Errors
    /// [`FilterError::MissingStore`] when no store is supplied.
    pub fn new(store: Option<CatalogStore>) -> Result<Self> {
        let store = store.ok_or(FilterError::MissingStore)?;

        Ok(Self { store })
    }

    /// The movies released in the given decade.
    ///
    /// Delegates directly to the store. Validation happens exactly once,
    /// inside [`CatalogStore::find_by_decade`], and every error
    /// propagates unchanged.
    pub fn filter(&self, decade: i32) -> Result<HashSet<Movie>> {
        self.store.find_by_decade(decade)
    }
}
