//! Conversion between positional MBQL arrays and `FilterClause`

use serde::{Deserialize, Serialize};
use serde_json::Value;
use super::error::ClauseError;
use super::expression::{is_expression_value, Expression};
use super::field_ref::FieldRef;
use super::types::{FieldTarget, FilterClause, SegmentId, StandardFilter};

pub const SEGMENT_OPERATOR: &str = "segment";

/// Operators a standard (non-expression-editor) filter can use
pub const STANDARD_OPERATORS: &[&str] = &[
    "=",
    "!=",
    "<",
    ">",
    "<=",
    ">=",
    "between",
    "inside",
    "is-null",
    "not-null",
    "is-empty",
    "not-empty",
    "contains",
    "does-not-contain",
    "starts-with",
    "ends-with",
    "time-interval",
];

pub fn is_standard_operator(name: &str) -> bool {
    STANDARD_OPERATORS.contains(&name)
}

/// `["relative-datetime", -30, "day"]` or `["relative-datetime", "current"]`
pub fn is_relative_datetime(value: &Value) -> bool {
    matches!(
        value.as_array().and_then(|items| items.first()).and_then(Value::as_str),
        Some("relative-datetime")
    )
}

/// `["+", field, ["interval", n, unit]]`, the shifted column of a
/// "starting from" relative date filter
pub fn is_interval_shifted_field(expr: &Expression) -> bool {
    match expr {
        Expression::Call { op, args } if op == "+" && args.len() == 2 => {
            matches!(args[0], Expression::Field(_)) && args[1].op() == Some("interval")
        }
        _ => false,
    }
}

fn is_field_like_expression(expr: &Expression) -> bool {
    expr.op() == Some("expression") || is_interval_shifted_field(expr)
}

fn is_standard_argument(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => true,
        Value::Array(_) => is_relative_datetime(value) || FieldRef::from_mbql(value).is_some(),
        Value::Object(_) => false,
    }
}

fn parse_standard(operator: Option<&str>, rest: &[Value]) -> Option<StandardFilter> {
    if let Some(name) = operator {
        if !is_standard_operator(name) {
            return None;
        }
    }
    let (target, mut args) = rest.split_first()?;
    let target = match FieldRef::from_mbql(target) {
        Some(field_ref) => FieldTarget::Field(field_ref),
        None if is_expression_value(target) => {
            let expr = Expression::from_mbql(target);
            if !is_field_like_expression(&expr) {
                return None;
            }
            FieldTarget::Expression(expr)
        }
        None => return None,
    };

    let mut options = None;
    if let Some((Value::Object(map), init)) = args.split_last() {
        options = Some(map.clone());
        args = init;
    }
    if !args.iter().all(is_standard_argument) {
        return None;
    }

    Some(StandardFilter {
        operator: operator.map(str::to_string),
        target,
        args: args.iter().cloned().map(Some).collect(),
        options,
    })
}

fn parse_segment(rest: &[Value]) -> Result<FilterClause, ClauseError> {
    match rest {
        [Value::Number(n)] => n
            .as_i64()
            .map(|id| FilterClause::Segment(SegmentId::Id(id)))
            .ok_or_else(|| ClauseError::InvalidSegmentId(n.to_string())),
        [Value::String(name)] => Ok(FilterClause::Segment(SegmentId::Name(name.clone()))),
        other => Err(ClauseError::InvalidSegmentId(Value::Array(other.to_vec()).to_string())),
    }
}

impl FilterClause {
    /// Classify a positional MBQL filter
    pub fn from_mbql(value: &Value) -> Result<Self, ClauseError> {
        let items = value
            .as_array()
            .ok_or_else(|| ClauseError::NotAnArray(value.to_string()))?;
        let Some((head, rest)) = items.split_first() else {
            return Ok(FilterClause::Empty);
        };

        match head {
            Value::String(op) if op == SEGMENT_OPERATOR => parse_segment(rest),
            Value::String(op) => Ok(match parse_standard(Some(op.as_str()), rest) {
                Some(filter) => FilterClause::Standard(filter),
                None => FilterClause::Custom(Expression::from_mbql(value)),
            }),
            Value::Null => parse_standard(None, rest)
                .map(FilterClause::Standard)
                .ok_or_else(|| ClauseError::InvalidOperator(value.to_string())),
            other => Err(ClauseError::InvalidOperator(other.to_string())),
        }
    }

    pub fn to_mbql(&self) -> Value {
        match self {
            FilterClause::Empty => Value::Array(Vec::new()),
            FilterClause::Standard(filter) => {
                let mut items = Vec::with_capacity(filter.args.len() + 3);
                items.push(
                    filter
                        .operator
                        .as_ref()
                        .map(|op| Value::String(op.clone()))
                        .unwrap_or(Value::Null),
                );
                items.push(match &filter.target {
                    FieldTarget::Field(field_ref) => field_ref.to_mbql(),
                    FieldTarget::Expression(expr) => expr.to_mbql(),
                });
                items.extend(filter.args.iter().map(|arg| arg.clone().unwrap_or(Value::Null)));
                if let Some(options) = &filter.options {
                    items.push(Value::Object(options.clone()));
                }
                Value::Array(items)
            }
            FilterClause::Segment(id) => {
                let id = match id {
                    SegmentId::Id(id) => Value::from(*id),
                    SegmentId::Name(name) => Value::String(name.clone()),
                };
                Value::Array(vec![Value::String(SEGMENT_OPERATOR.to_string()), id])
            }
            FilterClause::Custom(expr) => expr.to_mbql(),
        }
    }
}

impl Serialize for FilterClause {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_mbql().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FilterClause {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        FilterClause::from_mbql(&value).map_err(serde::de::Error::custom)
    }
}
