use std::sync::{Mutex, PoisonError};

use crate::error::RepositoryError;
use crate::models::{ProductQuery, ResultSet};

use super::ProductRepository;

/// Decorator that records every `search` call before delegating to `inner`.
#[derive(Debug)]
pub struct SpyProductRepository<R> {
    inner: R,
    queries: Mutex<Vec<ProductQuery>>,
}

impl<R: ProductRepository> SpyProductRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Number of times `search` was called.
    pub fn search_calls(&self) -> usize {
        self.queries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Queries passed to `search`, oldest first.
    pub fn search_args(&self) -> Vec<ProductQuery> {
        self.queries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: ProductRepository> ProductRepository for SpyProductRepository<R> {
    fn search(&self, query: &ProductQuery) -> Result<ResultSet, RepositoryError> {
        self.queries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(*query);
        self.inner.search(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Product, ProductTable};
    use crate::repository::{InMemoryProductRepository, StubProductRepository};

    #[test]
    fn records_calls_and_arguments() {
        let spy = SpyProductRepository::new(StubProductRepository::returning(ResultSet::new()));
        assert_eq!(spy.search_calls(), 0);

        spy.search(&ProductQuery::all()).unwrap();
        spy.search(&ProductQuery::by_id(3)).unwrap();

        assert_eq!(spy.search_calls(), 2);
        assert_eq!(spy.search_args(), vec![ProductQuery::all(), ProductQuery::by_id(3)]);
    }

    #[test]
    fn passes_through_inner_results() {
        let table = ProductTable::from_products(vec![Product::new(1, "product 1", 10.0, 1)]).unwrap();
        let spy = SpyProductRepository::new(InMemoryProductRepository::new(table));

        let results = spy.search(&ProductQuery::by_id(1)).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(spy.inner().len(), 1);
    }

    #[test]
    fn records_failed_calls_too() {
        let spy = SpyProductRepository::new(StubProductRepository::failing(
            RepositoryError::Other("unknown error".to_string()),
        ));

        let err = spy.search(&ProductQuery::all()).unwrap_err();
        assert_eq!(err, RepositoryError::Other("unknown error".to_string()));
        assert_eq!(spy.search_calls(), 1);
    }
}
