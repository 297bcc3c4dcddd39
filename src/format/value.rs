//! Plain-text rendering of filter argument values

use serde_json::Value;
use crate::clause::FieldRef;
use crate::operator::FormatOptions;

/// Render one argument for a filter label
pub fn format_value(value: &Value, options: FormatOptions) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if options.compact {
                if let Some(f) = n.as_f64().filter(|_| !n.is_i64() && !n.is_u64()) {
                    return format_compact(f);
                }
            }
            n.to_string()
        }
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            if FieldRef::from_mbql(value).is_some() {
                return value.to_string();
            }
            items
                .iter()
                .map(|item| format_value(item, options))
                .collect::<Vec<_>>()
                .join(", ")
        }
        Value::Object(_) => value.to_string(),
    }
}

/// Two decimals at most, trailing zeros dropped
fn format_compact(f: f64) -> String {
    let rounded = format!("{:.2}", f);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
