//! Descriptions of date filter values ("Previous 30 days", "January 2024")

use chrono::{NaiveDate, NaiveTime};
use serde_json::Value;
use crate::clause::{is_relative_datetime, Argument};
use crate::model::TemporalUnit;
use crate::settings::FormatSettings;
use super::datetime::{format_date_time, format_hour, format_with_unit, parse_timestamp};

/// How far a relative interval reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntervalAmount {
    Count(i64),
    Current,
    Next,
    Last,
}

impl IntervalAmount {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(IntervalAmount::Count),
            Value::String(s) => match s.as_str() {
                "current" => Some(IntervalAmount::Current),
                "next" => Some(IntervalAmount::Next),
                "last" => Some(IntervalAmount::Last),
                _ => None,
            },
            _ => None,
        }
    }
}

fn pluralize(unit: &str, n: u64) -> String {
    if n == 1 {
        unit.to_string()
    } else {
        format!("{}s", unit)
    }
}

/// "Today", "Previous 30 days", "Next 3 months", "This week", "Last year"
fn interval_description(amount: IntervalAmount, unit: &str) -> String {
    if unit == "day" {
        match amount {
            IntervalAmount::Current | IntervalAmount::Count(0) => return "Today".to_string(),
            IntervalAmount::Next | IntervalAmount::Count(1) => return "Tomorrow".to_string(),
            IntervalAmount::Last | IntervalAmount::Count(-1) => return "Yesterday".to_string(),
            IntervalAmount::Count(_) => {}
        }
    }
    match amount {
        IntervalAmount::Current | IntervalAmount::Count(0) => format!("This {}", unit),
        IntervalAmount::Next => format!("Next {}", unit),
        IntervalAmount::Last => format!("Last {}", unit),
        IntervalAmount::Count(n) => {
            let count = n.unsigned_abs();
            let direction = if n < 0 { "Previous" } else { "Next" };
            format!("{} {} {}", direction, count, pluralize(unit, count))
        }
    }
}

/// `["relative-datetime", -2, "week"]` relative to a column bucketed by `unit`
fn relative_datetime_description(items: &[Value], unit: Option<TemporalUnit>) -> Option<String> {
    let column_unit = unit.unwrap_or(TemporalUnit::Day).as_str();
    let mut amount = IntervalAmount::from_value(items.get(1)?)?;
    let mut value_unit = items.get(2).and_then(Value::as_str).unwrap_or(column_unit);
    if amount == IntervalAmount::Current {
        amount = IntervalAmount::Count(0);
        value_unit = column_unit;
    }
    if value_unit == column_unit {
        return Some(interval_description(amount, value_unit));
    }
    match amount {
        IntervalAmount::Count(0) => Some("Now".to_string()),
        IntervalAmount::Count(n) => {
            let count = n.unsigned_abs();
            let suffix = if n < 0 { "ago" } else { "from now" };
            Some(format!("{} {} {}", count, pluralize(value_unit, count), suffix))
        }
        _ => None,
    }
}

fn value_description(value: &Value, unit: Option<TemporalUnit>, settings: &FormatSettings) -> Option<String> {
    match value {
        Value::Number(n) if unit == Some(TemporalUnit::HourOfDay) => {
            let hour = u32::try_from(n.as_u64()?).ok()?;
            let time = NaiveTime::from_hms_opt(hour, 0, 0)?;
            Some(format_hour(NaiveDate::MIN.and_time(time), settings.time_style))
        }
        Value::String(s) => {
            let dt = parse_timestamp(s)?;
            Some(match unit {
                Some(unit) => format_with_unit(dt, unit, settings),
                None => format_date_time(dt, settings),
            })
        }
        Value::Array(items) if is_relative_datetime(value) => relative_datetime_description(items, unit),
        _ => None,
    }
}

/// Describe the arguments of a filter on a date column.
///
/// `time-interval` filters collapse to one phrase; every other operator
/// describes its values one by one. Values that cannot be described are
/// left out.
pub fn time_filter_value_descriptions(
    operator: Option<&str>,
    args: &[Argument],
    unit: Option<TemporalUnit>,
    settings: &FormatSettings,
) -> Vec<String> {
    if operator == Some("time-interval") {
        let amount = args.first().and_then(|a| a.as_ref()).and_then(IntervalAmount::from_value);
        let interval_unit = args.get(1).and_then(|a| a.as_ref()).and_then(Value::as_str);
        return match (amount, interval_unit) {
            (Some(amount), Some(interval_unit)) => vec![interval_description(amount, interval_unit)],
            _ => Vec::new(),
        };
    }

    args.iter()
        .flatten()
        .filter_map(|value| {
            let description = value_description(value, unit, settings);
            if description.is_none() {
                tracing::warn!(value = %value, "Cannot describe date filter value");
            }
            description
        })
        .collect()
}
