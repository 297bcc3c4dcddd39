//! Label formatting (verb module)
//!
//! Turns argument values, dates and expressions into the text shown in
//! filter pills.

mod datetime;
mod expression;
mod time_filter;
mod value;

pub use datetime::{
    end_of, format_date, format_date_part, format_date_time, format_range_with_unit, format_with_unit,
    normalize_range, ordinal, parse_timestamp, start_of, week_of_year, DATE_FORMAT, DATE_TIME_FORMAT,
};
pub use expression::{format_expression, ExpressionNames};
pub use time_filter::time_filter_value_descriptions;
pub use value::format_value;
