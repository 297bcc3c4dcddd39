//! Structured query types (noun module)
//!
//! The query owns the filter list and the metadata filters are resolved
//! against. Filter clauses see it only through `FilterContext`.

mod command;
mod context;
mod error;
mod structured;

pub use command::FilterCommand;
pub use context::FilterContext;
pub use error::QueryError;
pub use structured::StructuredQuery;
