//! Resolved dimensions

use super::field::Field;
use super::types::TemporalUnit;
use crate::clause::FieldRef;
use crate::operator::{default_operator_for_field, operators_for_field, FilterOperator};

/// A field reference resolved against metadata: the column, the reference
/// that reached it, and the operators it can be filtered with.
#[derive(Debug, Clone)]
pub struct Dimension {
    field: Field,
    field_ref: FieldRef,
    operators: Vec<FilterOperator>,
}

impl Dimension {
    pub fn new(field: Field, field_ref: FieldRef) -> Self {
        let operators = operators_for_field(&field);
        Self {
            field,
            field_ref,
            operators,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn display_name(&self) -> &str {
        self.field.display_name()
    }

    pub fn temporal_unit(&self) -> Option<TemporalUnit> {
        self.field_ref.temporal_unit()
    }

    /// The same column bucketed by another temporal unit
    pub fn with_temporal_unit(&self, unit: TemporalUnit) -> Dimension {
        Dimension {
            field: self.field.clone(),
            field_ref: self.field_ref.clone().with_temporal_unit(unit),
            operators: self.operators.clone(),
        }
    }

    /// The MBQL reference for this dimension
    pub fn mbql(&self) -> FieldRef {
        self.field_ref.clone()
    }

    /// Same column reached the same way with the same bucketing.
    /// `base-type` and other informational options are ignored.
    pub fn is_equal(&self, other: &Dimension) -> bool {
        let (a, b) = (&self.field_ref, &other.field_ref);
        a.id == b.id
            && a.options.temporal_unit == b.options.temporal_unit
            && a.options.source_field == b.options.source_field
            && a.options.join_alias == b.options.join_alias
    }

    pub fn filter_operators(&self) -> &[FilterOperator] {
        &self.operators
    }

    pub fn filter_operator(&self, name: &str) -> Option<&FilterOperator> {
        self.operators.iter().find(|op| op.name == name)
    }

    pub fn default_filter_operator(&self) -> Option<FilterOperator> {
        default_operator_for_field(&self.field)
    }
}
