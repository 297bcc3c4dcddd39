//! A structured query over one source table and its filter list

use serde_json::{json, Map, Value};
use crate::clause::{Expression, FieldId, FieldRef, FilterClause, SegmentId};
use crate::format::{format_expression, ExpressionNames};
use crate::model::{Dimension, Field, Metadata, Segment, Table};
use crate::settings::FormatSettings;
use super::command::FilterCommand;
use super::context::FilterContext;
use super::error::QueryError;

/// A query against `source_table`, holding its filters as parsed clauses.
///
/// Values are never changed in place: every filter command returns a new query.
#[derive(Debug, Clone)]
pub struct StructuredQuery<'m> {
    metadata: &'m Metadata,
    source_table: i64,
    filters: Vec<FilterClause>,
    settings: FormatSettings,
}

impl<'m> StructuredQuery<'m> {
    pub fn new(metadata: &'m Metadata, source_table: i64) -> Self {
        Self {
            metadata,
            source_table,
            filters: Vec::new(),
            settings: FormatSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: FormatSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_filters(mut self, filters: Vec<FilterClause>) -> Self {
        self.filters = filters;
        self
    }

    /// Parse `{"source-table": 1, "filter": [...]}`. A top-level `and`
    /// is split into separate filters.
    pub fn from_mbql(metadata: &'m Metadata, value: &Value) -> Result<Self, QueryError> {
        let source_table = value
            .get("source-table")
            .and_then(Value::as_i64)
            .ok_or_else(|| QueryError::InvalidQuery("missing source-table".to_string()))?;
        if metadata.get_table(source_table).is_none() {
            return Err(QueryError::InvalidQuery(format!("unknown table {}", source_table)));
        }

        let filters = match value.get("filter") {
            None | Some(Value::Null) => Vec::new(),
            Some(filter) => match filter.as_array().map(Vec::as_slice) {
                Some([Value::String(op), clauses @ ..]) if op == "and" => clauses
                    .iter()
                    .map(FilterClause::from_mbql)
                    .collect::<Result<Vec<_>, _>>()?,
                _ => vec![FilterClause::from_mbql(filter)?],
            },
        };
        tracing::trace!(source_table, filters = filters.len(), "Parsed structured query");

        Ok(Self::new(metadata, source_table).with_filters(filters))
    }

    pub fn to_mbql(&self) -> Value {
        let mut query = Map::new();
        query.insert("source-table".to_string(), json!(self.source_table));
        match self.filters.as_slice() {
            [] => {}
            [single] => {
                query.insert("filter".to_string(), single.to_mbql());
            }
            many => {
                let mut items = vec![json!("and")];
                items.extend(many.iter().map(FilterClause::to_mbql));
                query.insert("filter".to_string(), Value::Array(items));
            }
        }
        Value::Object(query)
    }

    pub fn metadata(&self) -> &'m Metadata {
        self.metadata
    }

    pub fn source_table(&self) -> Option<&'m Table> {
        self.metadata.get_table(self.source_table)
    }

    pub fn filters(&self) -> &[FilterClause] {
        &self.filters
    }

    pub fn filter(&self, index: usize) -> Option<&FilterClause> {
        self.filters.get(index)
    }

    fn check_index(&self, index: usize) -> Result<(), QueryError> {
        if index < self.filters.len() {
            Ok(())
        } else {
            Err(QueryError::FilterIndexOutOfRange {
                index,
                len: self.filters.len(),
            })
        }
    }

    /// New query with the filter at `index` replaced
    pub fn update_filter(&self, index: usize, clause: FilterClause) -> Result<Self, QueryError> {
        self.check_index(index)?;
        let mut query = self.clone();
        query.filters[index] = clause;
        Ok(query)
    }

    /// New query with `clause` appended
    pub fn add_filter(&self, clause: FilterClause) -> Self {
        let mut query = self.clone();
        query.filters.push(clause);
        query
    }

    /// New query without the filter at `index`
    pub fn remove_filter(&self, index: usize) -> Result<Self, QueryError> {
        self.check_index(index)?;
        let mut query = self.clone();
        query.filters.remove(index);
        Ok(query)
    }

    pub fn apply(&self, command: FilterCommand) -> Result<Self, QueryError> {
        tracing::debug!(command = ?command, "Applying filter command");
        match command {
            FilterCommand::Replace { index, clause } => self.update_filter(index, clause),
            FilterCommand::Add(clause) => Ok(self.add_filter(clause)),
            FilterCommand::Remove(index) => self.remove_filter(index),
        }
    }

    /// Dimensions offered for new filters: columns of the source table, then
    /// columns of each table a foreign key of the source table points at
    pub fn filter_dimension_options(&self) -> Vec<Dimension> {
        let Some(table) = self.source_table() else {
            return Vec::new();
        };
        let mut options: Vec<Dimension> = table
            .fields
            .iter()
            .map(|field| Dimension::new(field.clone(), FieldRef::id(field.id)))
            .collect();

        for fk in table.fields.iter().filter(|f| f.is_fk()) {
            let Some(target_table) = self.fk_target_table(fk) else {
                continue;
            };
            options.extend(target_table.fields.iter().map(|field| {
                Dimension::new(field.clone(), FieldRef::id(field.id).with_source_field(fk.id))
            }));
        }
        options
    }

    /// Segments offered for new filters on the source table
    pub fn filter_segment_options(&self) -> Vec<&'m Segment> {
        self.metadata.table_segments(self.source_table)
    }

    fn fk_target_table(&self, fk: &Field) -> Option<&'m Table> {
        let target_id = fk.fk_target_field_id?;
        self.metadata.field(target_id).map(|(table, _)| table)
    }
}

impl FilterContext for StructuredQuery<'_> {
    fn parse_field_reference(&self, field_ref: &FieldRef) -> Option<Dimension> {
        let field = match &field_ref.id {
            FieldId::Id(id) => self.metadata.field(*id).map(|(_, field)| field),
            FieldId::Name(name) => self.source_table().and_then(|table| table.field_by_name(name)),
        };
        if field.is_none() {
            tracing::trace!(field_ref = ?field_ref, "Field reference did not resolve");
        }
        field.map(|field| Dimension::new(field.clone(), field_ref.clone()))
    }

    fn is_filterable(&self, dimension: &Dimension) -> bool {
        let field_ref = dimension.mbql();
        if field_ref.options.join_alias.is_some() {
            return false;
        }
        let Some(source_table) = self.source_table() else {
            return false;
        };
        let owner = match self.metadata.field(dimension.field().id) {
            Some((table, _)) => table.id,
            None => return false,
        };
        match field_ref.options.source_field {
            None => owner == source_table.id,
            Some(fk_id) => source_table
                .get_field(fk_id)
                .filter(|fk| fk.is_fk())
                .and_then(|fk| self.fk_target_table(fk))
                .is_some_and(|target| target.id == owner),
        }
    }

    fn segment(&self, id: &SegmentId) -> Option<&Segment> {
        match id {
            SegmentId::Id(id) => self.metadata.segment(*id),
            SegmentId::Name(_) => None,
        }
    }

    fn format_expression(&self, expr: &Expression) -> String {
        format_expression(expr, self)
    }

    fn format_settings(&self) -> &FormatSettings {
        &self.settings
    }
}

impl ExpressionNames for StructuredQuery<'_> {
    fn field_name(&self, field_ref: &FieldRef) -> String {
        match self.parse_field_reference(field_ref) {
            Some(dimension) => dimension.display_name().to_string(),
            None => match &field_ref.id {
                FieldId::Name(name) => name.clone(),
                FieldId::Id(_) => "Unknown Field".to_string(),
            },
        }
    }

    fn segment_name(&self, id: &Value) -> Option<String> {
        let segment = self.metadata.segment(id.as_i64()?)?;
        Some(segment.display_name().to_string())
    }
}
