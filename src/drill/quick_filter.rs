//! Quick filters for a clicked cell

use serde_json::Value;
use crate::clause::{FieldTarget, FieldRef, FilterClause, StandardFilter};
use crate::model::Field;
use crate::query::FilterContext;

/// Text longer than this is matched with `contains` rather than equality
const LONG_TEXT_LENGTH: usize = 20;

/// One entry of the quick filter menu
#[derive(Debug, Clone, PartialEq)]
pub struct QuickFilterDrill {
    /// Menu label (`<`, `Is christ`, `Contains…`)
    pub title: String,
    /// Filter to add when the entry is picked. Its arguments may still be
    /// unset (`Contains…` asks the user for the text).
    pub clause: FilterClause,
}

impl QuickFilterDrill {
    fn new(title: impl Into<String>, clause: FilterClause) -> Self {
        Self {
            title: title.into(),
            clause,
        }
    }
}

fn compare(field_ref: &FieldRef, value: &Value, titles: [(&str, &str); 4]) -> Vec<QuickFilterDrill> {
    titles
        .into_iter()
        .map(|(title, op)| QuickFilterDrill::new(title, FilterClause::standard(op, field_ref.clone(), vec![value.clone()])))
        .collect()
}

fn is_long_text(field: &Field, value: &Value) -> bool {
    field.is_long_text() || value.as_str().is_some_and(|s| s.chars().count() > LONG_TEXT_LENGTH)
}

/// Filters offered for `value` in the column `field_ref`.
///
/// Key columns get none; they drill to the referenced object instead.
pub fn quick_filter_drills(ctx: &dyn FilterContext, field_ref: &FieldRef, value: &Value) -> Vec<QuickFilterDrill> {
    let Some(dimension) = ctx.parse_field_reference(field_ref) else {
        return Vec::new();
    };
    let field = dimension.field();
    if field.is_pk() || field.is_fk() {
        return Vec::new();
    }

    if value.is_null() {
        return vec![
            QuickFilterDrill::new("Is empty", FilterClause::standard("is-null", field_ref.clone(), Vec::new())),
            QuickFilterDrill::new("Not empty", FilterClause::standard("not-null", field_ref.clone(), Vec::new())),
        ];
    }

    let drills = if field.is_date() {
        compare(field_ref, value, [("Before", "<"), ("After", ">"), ("On", "="), ("Not on", "!=")])
    } else if field.is_numeric() || field.is_coordinate() {
        compare(field_ref, value, [("<", "<"), (">", ">"), ("=", "="), ("≠", "!=")])
    } else if field.is_string() && is_long_text(field, value) {
        let unset = FilterClause::Standard(StandardFilter {
            operator: None,
            target: FieldTarget::Field(field_ref.clone()),
            args: Vec::new(),
            options: None,
        });
        vec![
            QuickFilterDrill::new("Contains…", unset.set_operator(ctx, "contains")),
            QuickFilterDrill::new("Does not contain…", unset.set_operator(ctx, "does-not-contain")),
        ]
    } else if field.is_string() {
        let text = value.as_str().map(str::to_string).unwrap_or_else(|| value.to_string());
        vec![
            QuickFilterDrill::new(format!("Is {}", text), FilterClause::standard("=", field_ref.clone(), vec![value.clone()])),
            QuickFilterDrill::new(format!("Is not {}", text), FilterClause::standard("!=", field_ref.clone(), vec![value.clone()])),
        ]
    } else if field.is_boolean() {
        vec![
            QuickFilterDrill::new("=", FilterClause::standard("=", field_ref.clone(), vec![value.clone()])),
            QuickFilterDrill::new("≠", FilterClause::standard("!=", field_ref.clone(), vec![value.clone()])),
        ]
    } else {
        Vec::new()
    };

    tracing::trace!(field = field.name.as_str(), drills = drills.len(), "Built quick filter drills");
    drills
}
