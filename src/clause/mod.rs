//! Filter clause types (noun module)
//!
//! A clause is parsed from its positional MBQL form exactly once, into a
//! tagged `FilterClause`. The operations on it live in `filter/`.

mod error;
mod expression;
mod field_ref;
mod mbql;
mod types;

pub use error::ClauseError;
pub use expression::{is_expression_value, Expression};
pub use field_ref::{FieldId, FieldOptions, FieldRef};
pub use mbql::{is_interval_shifted_field, is_relative_datetime, is_standard_operator, SEGMENT_OPERATOR, STANDARD_OPERATORS};
pub use types::{Argument, FieldTarget, FilterClause, FilterOptions, SegmentId, StandardFilter};
