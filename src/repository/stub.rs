use crate::error::RepositoryError;
use crate::models::{ProductQuery, ResultSet};

use super::ProductRepository;

type SearchFn = dyn Fn(&ProductQuery) -> Result<ResultSet, RepositoryError> + Send + Sync;

/// Repository whose answers are scripted by a closure. Handy for driving the
/// handler into paths the in-memory table can't reach, like store failures.
pub struct StubProductRepository {
    search_fn: Box<SearchFn>,
}

impl StubProductRepository {
    pub fn new<F>(search_fn: F) -> Self
    where
        F: Fn(&ProductQuery) -> Result<ResultSet, RepositoryError> + Send + Sync + 'static,
    {
        Self {
            search_fn: Box::new(search_fn),
        }
    }

    /// Always answers with a clone of `results`.
    pub fn returning(results: ResultSet) -> Self {
        Self::new(move |_| Ok(results.clone()))
    }

    /// Always fails with `err`.
    pub fn failing(err: RepositoryError) -> Self {
        Self::new(move |_| Err(err.clone()))
    }
}

impl ProductRepository for StubProductRepository {
    fn search(&self, query: &ProductQuery) -> Result<ResultSet, RepositoryError> {
        (self.search_fn)(query)
    }
}

impl std::fmt::Debug for StubProductRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StubProductRepository").finish_non_exhaustive()
    }
}
