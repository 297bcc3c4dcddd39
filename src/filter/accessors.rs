//! Classification and read access

use crate::clause::{
    is_interval_shifted_field, is_relative_datetime, Argument, Expression, FieldRef, FieldTarget,
    FilterClause, FilterOptions, SegmentId, SEGMENT_OPERATOR,
};
use crate::model::{Dimension, Field, Segment};
use crate::operator::FilterOperator;
use crate::query::FilterContext;

impl FilterClause {
    /// Operator, field (or field-like expression) and arguments
    pub fn is_standard(&self) -> bool {
        matches!(self, FilterClause::Standard(_))
    }

    pub fn is_segment(&self) -> bool {
        matches!(self, FilterClause::Segment(_))
    }

    /// Written in the expression editor
    pub fn is_custom(&self) -> bool {
        matches!(self, FilterClause::Custom(_))
    }

    /// Whether the first operand is a plain field reference, for standard
    /// and custom clauses alike
    pub fn is_field_filter(&self) -> bool {
        self.field_ref().is_some()
    }

    /// The field reference in first-operand position
    pub fn field_ref(&self) -> Option<&FieldRef> {
        match self {
            FilterClause::Standard(filter) => filter.target.field_ref(),
            FilterClause::Custom(Expression::Call { args, .. }) => match args.first() {
                Some(Expression::Field(field_ref)) => Some(field_ref),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn segment_id(&self) -> Option<&SegmentId> {
        match self {
            FilterClause::Segment(id) => Some(id),
            _ => None,
        }
    }

    /// The referenced segment, `None` when it is unknown to the query's metadata
    pub fn segment<'c>(&self, ctx: &'c dyn FilterContext) -> Option<&'c Segment> {
        self.segment_id().and_then(|id| ctx.segment(id))
    }

    pub fn operator_name(&self) -> Option<&str> {
        match self {
            FilterClause::Empty => None,
            FilterClause::Standard(filter) => filter.operator.as_deref(),
            FilterClause::Segment(_) => Some(SEGMENT_OPERATOR),
            FilterClause::Custom(expr) => expr.op(),
        }
    }

    /// Operator arguments, without the options map
    pub fn arguments(&self) -> &[Argument] {
        match self {
            FilterClause::Standard(filter) => &filter.args,
            _ => &[],
        }
    }

    pub fn options(&self) -> Option<&FilterOptions> {
        match self {
            FilterClause::Standard(filter) => filter.options.as_ref(),
            _ => None,
        }
    }

    /// The column inside `["+", field, ["interval", n, unit]]`, when that is
    /// what the clause filters on
    pub fn relative_datetime_field(&self) -> Option<&FieldRef> {
        match self {
            FilterClause::Standard(filter) => match &filter.target {
                FieldTarget::Expression(expr @ Expression::Call { args, .. }) if is_interval_shifted_field(expr) => {
                    match args.first() {
                        Some(Expression::Field(field_ref)) => Some(field_ref),
                        _ => None,
                    }
                }
                _ => None,
            },
            _ => None,
        }
    }

    /// "Previous 3 months, starting 1 year ago":
    /// `["between", ["+", field, ["interval", ..]], ["relative-datetime", ..], ["relative-datetime", ..]]`
    pub fn is_starting_from(&self) -> bool {
        let Some(filter) = self.as_standard() else {
            return false;
        };
        filter.operator.as_deref() == Some("between")
            && self.relative_datetime_field().is_some()
            && filter.args.len() == 2
            && filter
                .args
                .iter()
                .all(|arg| arg.as_ref().is_some_and(is_relative_datetime))
    }

    /// Resolve the filtered column through the query
    pub fn dimension(&self, ctx: &dyn FilterContext) -> Option<Dimension> {
        let field_ref = self.field_ref().or_else(|| self.relative_datetime_field())?;
        ctx.parse_field_reference(field_ref)
    }

    pub fn field(&self, ctx: &dyn FilterContext) -> Option<Field> {
        self.dimension(ctx).map(|dimension| dimension.field().clone())
    }

    /// Look up `name` among the operators of the filtered column
    pub fn operator(&self, ctx: &dyn FilterContext, name: &str) -> Option<FilterOperator> {
        self.dimension(ctx)?.filter_operator(name).cloned()
    }

    pub fn current_operator(&self, ctx: &dyn FilterContext) -> Option<FilterOperator> {
        let name = self.operator_name()?;
        self.operator(ctx, name)
    }

    /// Operators offered for the filtered column, in picker order
    pub fn filter_operators(&self, ctx: &dyn FilterContext) -> Option<Vec<FilterOperator>> {
        self.dimension(ctx).map(|dimension| dimension.filter_operators().to_vec())
    }

    pub fn is_dimension(&self, ctx: &dyn FilterContext, other: &Dimension) -> bool {
        self.dimension(ctx).is_some_and(|dimension| dimension.is_equal(other))
    }

    pub fn is_operator(&self, ctx: &dyn FilterContext, name: &str) -> bool {
        self.current_operator(ctx).is_some_and(|operator| operator.name == name)
    }
}
