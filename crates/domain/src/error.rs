//! Unified error types for the domain layer

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A catalog list has no entries, so nothing can be drawn from it
    #[error("Catalog list '{list}' is empty")]
    EmptyCatalog { list: &'static str },
}

impl DomainError {
    /// Create an empty catalog error for the named list
    pub fn empty_catalog(list: &'static str) -> Self {
        Self::EmptyCatalog { list }
    }
}
