//! Catalog domain errors.

use thiserror::Error;

/// Errors raised by [`CatalogStore`](super::CatalogStore) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No item carries the requested id.
    #[error("item {0} not found")]
    NotFound(u64),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
