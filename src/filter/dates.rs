//! Date-aware labels and date picker normalization

use chrono::NaiveDateTime;
use serde_json::Value;
use crate::clause::{FieldTarget, FilterClause, StandardFilter};
use crate::format::{
    format_date_part, format_range_with_unit, normalize_range, parse_timestamp, DATE_FORMAT, DATE_TIME_FORMAT,
};
use crate::model::TemporalUnit;
use crate::query::FilterContext;

fn format_args(values: &[NaiveDateTime], format: &str) -> Vec<Option<Value>> {
    values
        .iter()
        .map(|dt| Some(Value::String(dt.format(format).to_string())))
        .collect()
}

impl FilterClause {
    /// The arguments as timestamps, when every one of them is a date string.
    /// `None` when there are no arguments or any of them is something else.
    pub fn date_args(&self) -> Option<Vec<NaiveDateTime>> {
        let args = self.arguments();
        if args.is_empty() {
            return None;
        }
        args.iter()
            .map(|arg| match arg {
                Some(Value::String(s)) => parse_timestamp(s),
                _ => None,
            })
            .collect()
    }

    /// A label for date arguments that reads better than the raw values:
    /// ranges condensed at the column's unit (`March 3–9, 2024`), or a phrase
    /// for extracted date parts (`16th day of the month`)
    pub fn better_date_label(&self, ctx: &dyn FilterContext) -> Option<String> {
        let args = self.date_args()?;
        let unit = self
            .dimension(ctx)
            .and_then(|dimension| dimension.temporal_unit())
            .unwrap_or(TemporalUnit::Day);
        let settings = ctx.format_settings();

        match self.operator_name() {
            Some("between") if unit.is_range_unit() => {
                let resolution = if unit == TemporalUnit::Week { TemporalUnit::Day } else { unit };
                Some(format_range_with_unit(&args, unit, resolution, settings))
            }
            Some("=") if unit == TemporalUnit::Week => {
                Some(format_range_with_unit(&args, unit, TemporalUnit::Day, settings))
            }
            Some("=") => format_date_part(args[0], unit, settings),
            _ => None,
        }
    }

    /// Rewrite into a shape the date picker can edit.
    ///
    /// Day filters get date-only arguments, minute and hour filters get
    /// date-time arguments, and week/month/quarter/year filters become
    /// day-level comparisons covering the same span. Anything else, including
    /// clauses without date arguments, comes back unchanged.
    pub fn to_date_picker_filter(&self, ctx: &dyn FilterContext) -> FilterClause {
        let Some(args) = self.date_args() else {
            return self.clone();
        };
        let (Some(dimension), Some(op)) = (self.dimension(ctx), self.operator_name()) else {
            return self.clone();
        };
        let unit = dimension.temporal_unit().unwrap_or(TemporalUnit::Day);
        let day_field = || FieldTarget::Field(dimension.with_temporal_unit(TemporalUnit::Day).mbql());

        let (operator, target, args) = match unit {
            TemporalUnit::Day => (op, day_field(), format_args(&args, DATE_FORMAT)),
            unit if unit.is_time_of_day() => {
                (op, FieldTarget::Field(dimension.mbql()), format_args(&args, DATE_TIME_FORMAT))
            }
            unit if unit.is_coarse() => {
                let Some((start, end)) = normalize_range(&args, unit, ctx.format_settings()) else {
                    return self.clone();
                };
                let (operator, bounds) = match op {
                    "=" | "between" => ("between", vec![start, end]),
                    "<" => ("<", vec![start]),
                    ">" => (">", vec![end]),
                    _ => return self.clone(),
                };
                (operator, day_field(), format_args(&bounds, DATE_FORMAT))
            }
            _ => return self.clone(),
        };

        FilterClause::Standard(StandardFilter {
            operator: Some(operator.to_string()),
            target,
            args,
            options: None,
        })
    }
}
