//! Product storage behind a small search capability.
//!
//! Handlers only ever see `Arc<dyn ProductRepository>`, so the in-memory
//! table, a scripted stub, or a spy wrapping either can be swapped in freely.

mod memory;
mod spy;
mod stub;

pub use memory::InMemoryProductRepository;
pub use spy::SpyProductRepository;
pub use stub::StubProductRepository;

use crate::error::RepositoryError;
use crate::models::{ProductQuery, ResultSet};

pub trait ProductRepository: Send + Sync {
    /// Return every product matching `query`.
    ///
    /// An id that matches nothing is an empty result, not an error. The error
    /// path is for the store itself failing.
    fn search(&self, query: &ProductQuery) -> Result<ResultSet, RepositoryError>;
}
