use crate::error::RepositoryError;
use crate::models::{ProductQuery, ProductTable, ResultSet};

use super::ProductRepository;

/// Repository over a table fixed at construction. Reads need no locking
/// because nothing can write after `new`.
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    table: ProductTable,
}

impl InMemoryProductRepository {
    pub fn new(table: ProductTable) -> Self {
        Self { table }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn search(&self, query: &ProductQuery) -> Result<ResultSet, RepositoryError> {
        let results: ResultSet = match query.id {
            None => self
                .table
                .iter()
                .map(|p| (p.id, p.clone()))
                .collect(),
            Some(id) => self
                .table
                .get(id)
                .map(|p| (p.id, p.clone()))
                .into_iter()
                .collect(),
        };
        Ok(results)
    }
}
