//! Explicit write-backs of filter changes into a query

use crate::clause::FilterClause;

/// A change to a query's filter list.
///
/// Filter mutations return new clauses; nothing reaches the query until one
/// of these is applied with `StructuredQuery::apply`.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterCommand {
    /// Replace the filter at `index`
    Replace { index: usize, clause: FilterClause },
    /// Append a new filter
    Add(FilterClause),
    /// Remove the filter at `index`
    Remove(usize),
}

impl FilterClause {
    /// Command writing this clause back over the filter at `index`
    pub fn replace_at(self, index: usize) -> FilterCommand {
        FilterCommand::Replace { index, clause: self }
    }

    /// Command appending this clause to the query's filters
    pub fn add_to_query(self) -> FilterCommand {
        FilterCommand::Add(self)
    }
}
