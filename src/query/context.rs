//! What filter operations need to know about the query that owns a clause

use crate::clause::{Expression, FieldRef, SegmentId};
use crate::model::{Dimension, Segment};
use crate::settings::FormatSettings;

/// Resolution capabilities passed into every filter operation that needs
/// metadata. Clauses never hold a reference to their query.
pub trait FilterContext {
    /// Resolve a field reference to a dimension, `None` if the field is unknown
    fn parse_field_reference(&self, field_ref: &FieldRef) -> Option<Dimension>;

    /// Whether the query currently offers `dimension` for filtering
    fn is_filterable(&self, dimension: &Dimension) -> bool;

    fn segment(&self, id: &SegmentId) -> Option<&Segment>;

    /// Render a custom filter expression for display
    fn format_expression(&self, expr: &Expression) -> String;

    fn format_settings(&self) -> &FormatSettings;
}
