//! mbql-filter - Filter clauses of structured queries
//!
//! This library provides:
//! - Metadata types (Table, Field, Segment) and their YAML parsing
//! - A tagged `FilterClause` parsed once from positional MBQL
//! - Operator metadata per column type
//! - Clause mutations (operator, column, arguments, options) as pure functions
//! - Validity checks and human-readable labels, including date ranges
//! - Quick filter drills for a clicked cell
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `model/` - metadata (Metadata, Table, Field, Segment, Dimension, TemporalUnit)
//! - `clause/` - clause types (FilterClause, StandardFilter, FieldRef, Expression)
//! - `operator/` - operator metadata (FilterOperator, ArgumentSpec)
//! - `query/` - the owning query (StructuredQuery, FilterContext, FilterCommand)
//!
//! **Verb modules** (transformations):
//! - `parser/` - YAML → Metadata
//! - `filter/` - FilterClause + FilterContext → new clause, validity, labels
//! - `format/` - values, dates and expressions → text
//! - `drill/` - clicked cell → quick filters
//!
//! # Example
//!
//! ```ignore
//! use mbql_filter::{parser, FilterClause, FieldRef, StructuredQuery, DisplayNameOptions};
//!
//! let metadata = parser::parse_file("metadata.yaml")?;
//! let query = StructuredQuery::new(&metadata, 1);
//! let clause = FilterClause::standard(">", FieldRef::id(12), vec![100.into()]);
//! if clause.is_valid(&query) {
//!     println!("{}", clause.display_name(&query, DisplayNameOptions::default()));
//!     let query = query.apply(clause.add_to_query())?;
//! }
//! ```

pub mod model;
pub mod clause;
pub mod operator;
pub mod query;
pub mod filter;
pub mod format;
pub mod drill;
pub mod parser;
pub mod settings;
pub mod error;

// Re-export commonly used types
pub use model::{Metadata, Table, Field, Segment, Dimension, BaseType, SemanticType, TemporalUnit};
pub use clause::{FilterClause, StandardFilter, FieldTarget, FieldRef, FieldId, SegmentId, Expression, Argument, ClauseError};
pub use operator::{FilterOperator, ArgumentSpec, ArgumentType, FormatOptions};
pub use query::{StructuredQuery, FilterContext, FilterCommand, QueryError};
pub use filter::{DisplayNameOptions, SetDimensionOptions};
pub use drill::{quick_filter_drills, QuickFilterDrill};
pub use settings::{FormatSettings, TimeStyle};
pub use error::ParseError;
