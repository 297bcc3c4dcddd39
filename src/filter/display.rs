//! Human-readable filter labels

use crate::clause::FilterClause;
use crate::format::{format_value, time_filter_value_descriptions};
use crate::model::TemporalUnit;
use crate::query::FilterContext;

/// Which parts `FilterClause::display_name` includes
#[derive(Debug, Clone, Copy)]
pub struct DisplayNameOptions {
    pub include_dimension: bool,
    pub include_operator: bool,
}

impl Default for DisplayNameOptions {
    fn default() -> Self {
        Self {
            include_dimension: true,
            include_operator: true,
        }
    }
}

impl FilterClause {
    /// Label for the filter pill, e.g. `Total is greater than 100`
    pub fn display_name(&self, ctx: &dyn FilterContext, options: DisplayNameOptions) -> String {
        match self {
            FilterClause::Segment(_) => self
                .segment(ctx)
                .map(|segment| segment.display_name().to_string())
                .unwrap_or_else(|| "Unknown Segment".to_string()),
            FilterClause::Standard(_) => self.standard_display_name(ctx, options),
            FilterClause::Custom(expr) => ctx.format_expression(expr),
            FilterClause::Empty => "Unknown Filter".to_string(),
        }
    }

    fn standard_display_name(&self, ctx: &dyn FilterContext, options: DisplayNameOptions) -> String {
        let dimension = self.dimension(ctx);
        let better_date = self.better_date_label(ctx);

        // The week range already says "on"
        let week_equality = self.operator_name() == Some("=")
            && dimension.as_ref().and_then(|d| d.temporal_unit()) == Some(TemporalUnit::Week);
        let include_operator = options.include_operator
            && !self.is_starting_from()
            && !(better_date.is_some() && week_equality);

        let operator_label = if include_operator {
            let name = if better_date.is_some() { Some("=") } else { self.operator_name() };
            name.and_then(|name| dimension.as_ref()?.filter_operator(name))
                .map(|operator| operator.more_verbose_name.clone())
        } else {
            None
        };
        let dimension_label = if options.include_dimension {
            dimension.as_ref().map(|d| d.display_name().to_string())
        } else {
            None
        };
        let values = better_date.unwrap_or_else(|| {
            self.formatted_arguments(ctx, ctx.format_settings().max_display_values)
                .join(" ")
        });

        [dimension_label, operator_label, Some(values)]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Argument labels in order.
    ///
    /// Multi-value filters with more than `max_display_values` values collapse
    /// to `N selections`; date columns get date descriptions; everything else
    /// is formatted per argument, leaving out hidden and unset ones.
    pub fn formatted_arguments(&self, ctx: &dyn FilterContext, max_display_values: usize) -> Vec<String> {
        let dimension = self.dimension(ctx);
        let operator = self.current_operator(ctx);
        let args = self.arguments();

        if operator.as_ref().is_some_and(|op| op.multi) && args.len() > max_display_values {
            let n = args.len();
            let label = if n == 1 {
                "1 selection".to_string()
            } else {
                format!("{} selections", n)
            };
            return vec![label];
        }

        if let Some(dimension) = &dimension {
            let field = dimension.field();
            if field.is_date() && !field.is_time() {
                return time_filter_value_descriptions(
                    self.operator_name(),
                    args,
                    dimension.temporal_unit(),
                    ctx.format_settings(),
                );
            }
        }

        args.iter()
            .enumerate()
            .filter_map(|(index, arg)| {
                let format_options = operator
                    .as_ref()
                    .map(|op| op.argument_format_options(index))
                    .unwrap_or_default();
                if format_options.hide {
                    return None;
                }
                arg.as_ref().map(|value| format_value(value, format_options))
            })
            .collect()
    }
}
