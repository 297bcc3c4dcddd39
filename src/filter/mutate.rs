//! Clause mutations
//!
//! Every method returns a new clause; the receiver is never changed.

use crate::clause::{Argument, FieldRef, FieldTarget, FilterClause, FilterOptions, StandardFilter};
use crate::query::FilterContext;

/// Options for `FilterClause::set_dimension`
#[derive(Debug, Clone, Copy, Default)]
pub struct SetDimensionOptions {
    /// Fall back to the new column's default operator when it does not
    /// support the current one
    pub use_default_operator: bool,
}

impl FilterClause {
    /// Switch to operator `name`, regenerating argument slots.
    ///
    /// New slots start at the operator's declared defaults. Old values are
    /// carried over by position when the argument types match; for a
    /// multi-value target operator, both sides are compared through their
    /// first argument spec.
    pub fn set_operator(&self, ctx: &dyn FilterContext, name: &str) -> FilterClause {
        let dimension = self.dimension(ctx);
        let target = match (&dimension, self) {
            (Some(dimension), _) => FieldTarget::Field(dimension.mbql()),
            (None, FilterClause::Standard(filter)) => filter.target.clone(),
            (None, _) => return self.clone(),
        };
        let operator = dimension.as_ref().and_then(|d| d.filter_operator(name));

        let mut filter = StandardFilter {
            operator: Some(name.to_string()),
            target,
            args: Vec::new(),
            options: None,
        };

        if let Some(operator) = operator {
            filter.args = operator.fields.iter().map(|spec| spec.default.clone()).collect();
            filter.options = operator.options_defaults.clone();

            if let Some(old_operator) = self.current_operator(ctx) {
                for (i, old_value) in self.arguments().iter().enumerate() {
                    let Some(value) = old_value else {
                        continue;
                    };
                    let spec = operator.argument_spec(i);
                    let old_spec = if operator.multi {
                        old_operator.fields.first()
                    } else {
                        old_operator.fields.get(i)
                    };
                    let same_type = matches!((spec, old_spec), (Some(a), Some(b)) if a.arg_type == b.arg_type);
                    if same_type {
                        if filter.args.len() <= i {
                            filter.args.resize(i + 1, None);
                        }
                        filter.args[i] = Some(value.clone());
                    }
                }
            }
        }

        tracing::debug!(operator = name, args = filter.args.len(), "Set filter operator");
        FilterClause::Standard(filter)
    }

    /// Point the clause at another column.
    ///
    /// `None` clears the clause. A reference that does not resolve leaves it
    /// unchanged, as does the column it already filters on. Otherwise the
    /// current operator is kept if the new column supports it; if not, the
    /// column's default operator is used when `use_default_operator` is set,
    /// and the operator is cleared when it is not.
    pub fn set_dimension(
        &self,
        ctx: &dyn FilterContext,
        field_ref: Option<&FieldRef>,
        options: SetDimensionOptions,
    ) -> FilterClause {
        let Some(field_ref) = field_ref else {
            return FilterClause::Empty;
        };
        let Some(dimension) = ctx.parse_field_reference(field_ref) else {
            return self.clone();
        };
        if self.is_field_filter() && self.is_dimension(ctx, &dimension) {
            return self.clone();
        }

        let kept = self
            .operator_name()
            .filter(|name| dimension.filter_operator(name).is_some())
            .map(str::to_string);
        let wanted = kept.clone().or_else(|| {
            if options.use_default_operator {
                dimension.default_filter_operator().map(|op| op.name)
            } else {
                None
            }
        });

        let rebuilt = match self {
            FilterClause::Standard(filter) if self.is_field_filter() => StandardFilter {
                operator: kept,
                target: FieldTarget::Field(dimension.mbql()),
                args: filter.args.clone(),
                options: filter.options.clone(),
            },
            _ => StandardFilter {
                operator: None,
                target: FieldTarget::Field(dimension.mbql()),
                args: Vec::new(),
                options: None,
            },
        };
        let rebuilt = FilterClause::Standard(rebuilt);
        tracing::debug!(field = ?field_ref, operator = ?wanted, "Set filter dimension");

        match wanted {
            Some(name) if rebuilt.operator_name() != Some(name.as_str()) => rebuilt.set_operator(ctx, &name),
            _ => rebuilt,
        }
    }

    /// Replace one argument, padding with unset slots when `index` is past the end
    pub fn set_argument(&self, index: usize, value: Argument) -> FilterClause {
        let FilterClause::Standard(filter) = self else {
            return self.clone();
        };
        let mut filter = filter.clone();
        if filter.args.len() <= index {
            filter.args.resize(index + 1, None);
        }
        filter.args[index] = value;
        FilterClause::Standard(filter)
    }

    /// Replace every argument. The options map is dropped.
    pub fn set_arguments(&self, values: Vec<Argument>) -> FilterClause {
        let FilterClause::Standard(filter) = self else {
            return self.clone();
        };
        FilterClause::Standard(StandardFilter {
            operator: filter.operator.clone(),
            target: filter.target.clone(),
            args: values,
            options: None,
        })
    }

    /// Replace the options map; an empty map removes it
    pub fn set_options(&self, options: FilterOptions) -> FilterClause {
        let FilterClause::Standard(filter) = self else {
            return self.clone();
        };
        let mut filter = filter.clone();
        filter.options = (!options.is_empty()).then_some(options);
        FilterClause::Standard(filter)
    }
}
