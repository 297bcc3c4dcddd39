//! Filter clause operations (verb module)
//!
//! Everything here is an inherent method on `FilterClause` taking the
//! owning query as a `&dyn FilterContext`. Mutations return new clauses;
//! writing one back into the query is a separate `FilterCommand`.

mod accessors;
mod dates;
mod display;
mod mutate;
mod validate;

pub use display::DisplayNameOptions;
pub use mutate::SetDimensionOptions;
