// Error types for the person store

use thiserror::Error;

/// Result alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record matched the requested id
    #[error("person not found: {0}")]
    NotFound(String),
}
