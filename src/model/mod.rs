//! Metadata types (nouns)
//!
//! These types represent the parsed table/field/segment metadata and the
//! dimensions resolved from it.

mod dimension;
mod field;
mod schema;
mod segment;
mod types;

pub use dimension::Dimension;
pub use field::{Field, Table};
pub use schema::Metadata;
pub use segment::Segment;
pub use types::{BaseType, ParseTemporalUnitError, SemanticType, TemporalUnit};
