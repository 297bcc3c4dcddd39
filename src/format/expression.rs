//! Custom expression formatting
//!
//! Renders an expression tree the way the expression editor shows it:
//! `[Total] > 100 AND contains([Category], "Gadget")`.

use serde_json::Value;
use crate::clause::{Expression, FieldRef};

/// Names for the things an expression refers to
pub trait ExpressionNames {
    /// Display name of a referenced column
    fn field_name(&self, field_ref: &FieldRef) -> String;
    /// Display name of the segment identified by `id`, if it exists
    fn segment_name(&self, id: &Value) -> Option<String>;
}

const INFIX_OPERATORS: &[&str] = &["=", "!=", "<", ">", "<=", ">=", "+", "-", "*", "/"];

/// Render `expr` as expression-editor source text
pub fn format_expression(expr: &Expression, names: &dyn ExpressionNames) -> String {
    format_node(expr, names, None)
}

fn format_node(expr: &Expression, names: &dyn ExpressionNames, parent: Option<&str>) -> String {
    match expr {
        Expression::Field(field_ref) => bracket(&names.field_name(field_ref)),
        Expression::Literal(value) => format_literal(value),
        Expression::Call { op, args } => format_call(op, args, names, parent),
    }
}

fn format_call(op: &str, args: &[Expression], names: &dyn ExpressionNames, parent: Option<&str>) -> String {
    let args: Vec<&Expression> = args.iter().filter(|arg| !is_options(arg)).collect();
    match op {
        "and" | "or" => {
            let joiner = if op == "and" { " AND " } else { " OR " };
            let text = args
                .iter()
                .map(|arg| format_node(arg, names, Some(op)))
                .collect::<Vec<_>>()
                .join(joiner);
            if parent.is_some() {
                format!("({})", text)
            } else {
                text
            }
        }
        "not" => {
            let inner = args.first().map(|arg| format_node(arg, names, Some(op))).unwrap_or_default();
            format!("NOT {}", inner)
        }
        "segment" => {
            let id = match args.first() {
                Some(Expression::Literal(id)) => id,
                _ => return "[Unknown Segment]".to_string(),
            };
            bracket(&names.segment_name(id).unwrap_or_else(|| "Unknown Segment".to_string()))
        }
        _ if INFIX_OPERATORS.contains(&op) && args.len() == 2 => {
            let text = format!(
                "{} {} {}",
                format_node(args[0], names, Some(op)),
                op,
                format_node(args[1], names, Some(op))
            );
            if parent.is_some_and(|p| INFIX_OPERATORS.contains(&p)) {
                format!("({})", text)
            } else {
                text
            }
        }
        _ => {
            let rendered = args
                .iter()
                .map(|arg| format_node(arg, names, None))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}({})", function_name(op), rendered)
        }
    }
}

fn is_options(expr: &Expression) -> bool {
    matches!(expr, Expression::Literal(Value::Object(_)))
}

fn bracket(name: &str) -> String {
    format!("[{}]", name.replace(']', "\\]"))
}

fn format_literal(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\"")),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// `does-not-contain` -> `doesNotContain`
fn function_name(op: &str) -> String {
    let mut name = String::with_capacity(op.len());
    let mut upper = false;
    for c in op.chars() {
        if c == '-' || c == '_' {
            upper = true;
        } else if upper {
            name.extend(c.to_uppercase());
            upper = false;
        } else {
            name.push(c);
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::FieldId;
    use serde_json::json;

    struct Names;

    impl ExpressionNames for Names {
        fn field_name(&self, field_ref: &FieldRef) -> String {
            match &field_ref.id {
                FieldId::Id(10) => "Total".to_string(),
                FieldId::Id(11) => "Category".to_string(),
                FieldId::Id(id) => format!("Field {}", id),
                FieldId::Name(name) => name.clone(),
            }
        }

        fn segment_name(&self, id: &Value) -> Option<String> {
            (id == &json!(1)).then(|| "Big orders".to_string())
        }
    }

    fn render(value: Value) -> String {
        format_expression(&Expression::from_mbql(&value), &Names)
    }

    #[test]
    fn test_boolean_connectives() {
        assert_eq!(
            render(json!(["and", [">", ["field", 10, null], 100], ["contains", ["field", 11, null], "Gadget", {"case-sensitive": false}]])),
            "[Total] > 100 AND contains([Category], \"Gadget\")"
        );
        assert_eq!(
            render(json!(["or", ["=", ["field", 11, null], "Widget"], ["and", ["<", ["field", 10, null], 5], ["segment", 1]]])),
            "[Category] = \"Widget\" OR ([Total] < 5 AND [Big orders])"
        );
        assert_eq!(render(json!(["not", ["is-null", ["field", 10, null]]])), "NOT isNull([Total])");
    }

    #[test]
    fn test_arithmetic_nesting() {
        assert_eq!(
            render(json!([">", ["*", ["field", 10, null], 2], 50])),
            "([Total] * 2) > 50"
        );
    }

    #[test]
    fn test_function_names() {
        assert_eq!(function_name("does-not-contain"), "doesNotContain");
        assert_eq!(function_name("between"), "between");
        assert_eq!(render(json!(["segment", 99])), "[Unknown Segment]");
    }

    #[test]
    fn test_string_escaping() {
        assert_eq!(render(json!(["=", ["field", 11, null], "say \"hi\""])), "[Category] = \"say \\\"hi\\\"\"");
    }
}
