//! Filter clause types

use serde_json::{Map, Value};
use super::expression::Expression;
use super::field_ref::FieldRef;

/// One operator argument. `None` is a slot that has not been filled in yet;
/// `Some(Value::Null)` is an explicit null.
pub type Argument = Option<Value>;

/// Free-form options trailing a clause's arguments (`{"case-sensitive": false}`)
pub type FilterOptions = Map<String, Value>;

/// Identifier of a saved segment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SegmentId {
    Id(i64),
    /// Segments defined outside the application database (e.g. `"gaid::-4"`)
    Name(String),
}

/// What a standard filter filters on
#[derive(Debug, Clone, PartialEq)]
pub enum FieldTarget {
    Field(FieldRef),
    /// An expression standing in for a field, e.g. `["expression", "Discount"]`
    /// or the shifted field of a "starting from" date filter
    Expression(Expression),
}

impl FieldTarget {
    pub fn field_ref(&self) -> Option<&FieldRef> {
        match self {
            FieldTarget::Field(field_ref) => Some(field_ref),
            FieldTarget::Expression(_) => None,
        }
    }
}

/// `[operator, field, ...arguments, options?]`
#[derive(Debug, Clone, PartialEq)]
pub struct StandardFilter {
    /// `None` while the user has picked a column but no operator yet
    pub operator: Option<String>,
    pub target: FieldTarget,
    pub args: Vec<Argument>,
    pub options: Option<FilterOptions>,
}

impl StandardFilter {
    pub fn new(operator: impl Into<String>, field: FieldRef, args: Vec<Value>) -> Self {
        Self {
            operator: Some(operator.into()),
            target: FieldTarget::Field(field),
            args: args.into_iter().map(Some).collect(),
            options: None,
        }
    }
}

/// A single filter condition of a structured query.
///
/// The variant is decided once when the clause is parsed; every accessor
/// and mutation works on the variant rather than re-inspecting positions.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FilterClause {
    /// `[]`, nothing chosen yet. Never valid.
    #[default]
    Empty,
    Standard(StandardFilter),
    /// `["segment", id]`
    Segment(SegmentId),
    /// Anything written in the expression editor that is not a plain
    /// operator/field/literals shape
    Custom(Expression),
}

impl FilterClause {
    /// Shorthand for a standard filter on a field with literal arguments
    pub fn standard(operator: impl Into<String>, field: FieldRef, args: Vec<Value>) -> Self {
        FilterClause::Standard(StandardFilter::new(operator, field, args))
    }

    pub fn segment_filter(id: i64) -> Self {
        FilterClause::Segment(SegmentId::Id(id))
    }

    pub fn as_standard(&self) -> Option<&StandardFilter> {
        match self {
            FilterClause::Standard(filter) => Some(filter),
            _ => None,
        }
    }
}
