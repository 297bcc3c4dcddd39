//! Whether a clause is complete enough to apply

use crate::clause::{FieldTarget, FilterClause};
use crate::query::FilterContext;

impl FilterClause {
    /// Single source of truth for "can this filter be run".
    ///
    /// Half-built clauses from the editor are expected here; they are simply
    /// invalid until completed.
    pub fn is_valid(&self, ctx: &dyn FilterContext) -> bool {
        match self {
            FilterClause::Standard(filter) => {
                let dimension = self.dimension(ctx);
                if dimension.is_none() && matches!(filter.target, FieldTarget::Expression(_)) {
                    return true;
                }
                let Some(dimension) = dimension else {
                    return false;
                };
                if !ctx.is_filterable(&dimension) {
                    return false;
                }
                let Some(name) = filter.operator.as_deref() else {
                    return false;
                };
                if let Some(operator) = dimension.filter_operator(name) {
                    let required = operator.fields.len();
                    if filter.args.len() < required {
                        return false;
                    }
                    let filled = filter.args[..required]
                        .iter()
                        .all(|arg| arg.as_ref().is_some_and(|value| !value.is_null()));
                    if !filled {
                        return false;
                    }
                }
                true
            }
            FilterClause::Segment(_) => self.segment(ctx).is_some(),
            FilterClause::Custom(_) => true,
            FilterClause::Empty => false,
        }
    }
}
