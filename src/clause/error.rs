//! Clause parsing errors

use thiserror::Error;

/// MBQL that cannot be read as a filter clause at all.
///
/// Incomplete clauses (no operator yet, missing arguments) are not errors;
/// they parse fine and report themselves through `is_valid`.
#[derive(Debug, Error)]
pub enum ClauseError {
    #[error("Filter clause must be an array, got {0}")]
    NotAnArray(String),

    #[error("Filter clause must start with an operator name, got {0}")]
    InvalidOperator(String),

    #[error("Segment id must be an integer or a string, got {0}")]
    InvalidSegmentId(String),
}
