//! Error types for query commands

use thiserror::Error;
use crate::clause::ClauseError;

/// Errors raised when reading or changing a query's filter list
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Filter index {index} out of range (query has {len} filters)")]
    FilterIndexOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Clause(#[from] ClauseError),
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}
