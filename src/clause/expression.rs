//! Expression trees embedded in filter clauses
//!
//! Custom filters built in the expression editor, and expression-valued
//! field slots (`["+", field, ["interval", 30, "day"]]`), are kept as a
//! generic operator tree rather than a closed grammar.

use serde_json::Value;
use super::field_ref::FieldRef;

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A column reference
    Field(FieldRef),
    /// A literal value, or an options map trailing an operator's arguments
    Literal(Value),
    /// An operator applied to arguments (`["and", ...]`, `["+", ...]`, `["contains", ...]`)
    Call { op: String, args: Vec<Expression> },
}

impl Expression {
    pub fn call(op: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::Call {
            op: op.into(),
            args,
        }
    }

    pub fn from_mbql(value: &Value) -> Self {
        if let Some(field_ref) = FieldRef::from_mbql(value) {
            return Expression::Field(field_ref);
        }
        match value.as_array().and_then(|items| items.split_first()) {
            Some((Value::String(op), rest)) => Expression::Call {
                op: op.clone(),
                args: rest.iter().map(Expression::from_mbql).collect(),
            },
            _ => Expression::Literal(value.clone()),
        }
    }

    pub fn to_mbql(&self) -> Value {
        match self {
            Expression::Field(field_ref) => field_ref.to_mbql(),
            Expression::Literal(value) => value.clone(),
            Expression::Call { op, args } => {
                let mut items = Vec::with_capacity(args.len() + 1);
                items.push(Value::String(op.clone()));
                items.extend(args.iter().map(Expression::to_mbql));
                Value::Array(items)
            }
        }
    }

    pub fn op(&self) -> Option<&str> {
        match self {
            Expression::Call { op, .. } => Some(op),
            _ => None,
        }
    }

    /// Every field referenced anywhere in the tree, in order of appearance
    pub fn field_refs(&self) -> Vec<&FieldRef> {
        let mut refs = Vec::new();
        self.collect_field_refs(&mut refs);
        refs
    }

    fn collect_field_refs<'a>(&'a self, refs: &mut Vec<&'a FieldRef>) {
        match self {
            Expression::Field(field_ref) => refs.push(field_ref),
            Expression::Literal(_) => {}
            Expression::Call { args, .. } => {
                for arg in args {
                    arg.collect_field_refs(refs);
                }
            }
        }
    }
}

/// True for operator-headed arrays (`["op", ...]`) that are not plain field references
pub fn is_expression_value(value: &Value) -> bool {
    FieldRef::from_mbql(value).is_none()
        && matches!(value.as_array().and_then(|items| items.first()), Some(Value::String(_)))
}
