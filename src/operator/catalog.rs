//! Operators offered for each kind of field
//!
//! The order of each list is the order operator pickers show them in.

use serde_json::{json, Map, Value};
use crate::model::Field;
use super::types::{ArgumentSpec, ArgumentType, FilterOperator, FormatOptions};

fn case_insensitive() -> Map<String, Value> {
    let mut defaults = Map::new();
    defaults.insert("case-sensitive".to_string(), Value::Bool(false));
    defaults
}

fn args(arg_type: ArgumentType, n: usize) -> Vec<ArgumentSpec> {
    (0..n).map(|_| ArgumentSpec::new(arg_type)).collect()
}

fn null_checks(empty_label: &str, not_empty_label: &str) -> [FilterOperator; 2] {
    [
        FilterOperator::new("is-null", empty_label, &empty_label.to_lowercase(), vec![]),
        FilterOperator::new(
            "not-null",
            not_empty_label,
            &format!("is {}", not_empty_label.to_lowercase()),
            vec![],
        ),
    ]
}

fn numeric_operators(arg_type: ArgumentType) -> Vec<FilterOperator> {
    let mut ops = vec![
        FilterOperator::new("=", "Equal to", "is equal to", args(arg_type, 1)).multi(),
        FilterOperator::new("!=", "Not equal to", "is not equal to", args(arg_type, 1)).multi(),
        FilterOperator::new(">", "Greater than", "is greater than", args(arg_type, 1)),
        FilterOperator::new("<", "Less than", "is less than", args(arg_type, 1)),
        FilterOperator::new("between", "Between", "between", args(arg_type, 2)),
        FilterOperator::new(
            ">=",
            "Greater than or equal to",
            "is greater than or equal to",
            args(arg_type, 1),
        ),
        FilterOperator::new("<=", "Less than or equal to", "is less than or equal to", args(arg_type, 1)),
    ];
    ops.extend(null_checks("Is empty", "Not empty"));
    ops
}

fn string_operators() -> Vec<FilterOperator> {
    let text = || args(ArgumentType::Text, 1);
    let mut ops = vec![
        FilterOperator::new("=", "Is", "is", text()).multi(),
        FilterOperator::new("!=", "Is not", "is not", text()).multi(),
        FilterOperator::new("contains", "Contains", "contains", text())
            .with_options_defaults(case_insensitive()),
        FilterOperator::new("does-not-contain", "Does not contain", "does not contain", text())
            .with_options_defaults(case_insensitive()),
    ];
    ops.extend(null_checks("Is null", "Not null"));
    ops.extend([
        FilterOperator::new("is-empty", "Is empty", "is empty", vec![]),
        FilterOperator::new("not-empty", "Not empty", "is not empty", vec![]),
        FilterOperator::new("starts-with", "Starts with", "starts with", text())
            .with_options_defaults(case_insensitive()),
        FilterOperator::new("ends-with", "Ends with", "ends with", text())
            .with_options_defaults(case_insensitive()),
    ]);
    ops
}

fn date_operators() -> Vec<FilterOperator> {
    let date = |n| args(ArgumentType::Date, n);
    let mut ops = vec![
        FilterOperator::new("=", "On", "is", date(1)),
        FilterOperator::new("!=", "Not on", "excludes", date(1)),
        FilterOperator::new("<", "Before", "is before", date(1)),
        FilterOperator::new(">", "After", "is after", date(1)),
        FilterOperator::new("between", "Between", "between", date(2)),
    ];
    ops.extend(null_checks("Is empty", "Not empty"));
    ops
}

fn time_operators() -> Vec<FilterOperator> {
    let time = |n| args(ArgumentType::Date, n);
    let mut ops = vec![
        FilterOperator::new("<", "Before", "is before", time(1)),
        FilterOperator::new(">", "After", "is after", time(1)),
        FilterOperator::new("between", "Between", "between", time(2)),
    ];
    ops.extend(null_checks("Is empty", "Not empty"));
    ops
}

fn boolean_operators() -> Vec<FilterOperator> {
    let mut ops = vec![FilterOperator::new(
        "=",
        "Is",
        "is",
        vec![ArgumentSpec::new(ArgumentType::Boolean).with_default(json!(true))],
    )];
    ops.extend(null_checks("Is empty", "Not empty"));
    ops
}

/// `["inside", lat-field, lon-field, north, west, south, east]`, offered on latitude columns
fn inside_operator() -> FilterOperator {
    let mut fields = vec![ArgumentSpec::new(ArgumentType::Field)];
    fields.extend(args(ArgumentType::Coordinate, 4));
    let compact = FormatOptions {
        hide: false,
        compact: true,
    };
    FilterOperator::new("inside", "Inside", "is inside", fields).with_format_options(vec![
        FormatOptions {
            hide: true,
            compact: false,
        },
        compact,
        compact,
        compact,
        compact,
    ])
}

/// All operators a field can be filtered with, in display order
pub fn operators_for_field(field: &Field) -> Vec<FilterOperator> {
    if field.is_coordinate() {
        let mut ops = numeric_operators(ArgumentType::Coordinate);
        if field.is_latitude() {
            ops.insert(2, inside_operator());
        }
        ops
    } else if field.is_date() {
        date_operators()
    } else if field.is_time() {
        time_operators()
    } else if field.is_numeric() {
        numeric_operators(ArgumentType::Number)
    } else if field.is_string() {
        string_operators()
    } else if field.is_boolean() {
        boolean_operators()
    } else {
        null_checks("Is empty", "Not empty").to_vec()
    }
}

/// The operator a freshly picked column starts with. Date columns have none;
/// the date picker chooses one.
pub fn default_operator_for_field(field: &Field) -> Option<FilterOperator> {
    if field.is_date() {
        return None;
    }
    operators_for_field(field).into_iter().next()
}
