//! Filter operator metadata (noun module)

mod catalog;
mod types;

pub use catalog::{default_operator_for_field, operators_for_field};
pub use types::{ArgumentSpec, ArgumentType, FilterOperator, FormatOptions};
