//! Root metadata definition

use serde::Deserialize;
use std::path::Path;
use super::field::{Field, Table};
use super::segment::Segment;
use crate::error::ParseError;

/// Table, field and segment metadata for one database
#[derive(Debug, Clone, Deserialize)]
pub struct Metadata {
    pub tables: Vec<Table>,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl Metadata {
    /// Load metadata from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        crate::parser::parse_file(path)
    }

    pub fn get_table(&self, id: i64) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    /// Find a field by id along with the table that owns it
    pub fn field(&self, id: i64) -> Option<(&Table, &Field)> {
        self.tables
            .iter()
            .find_map(|table| table.get_field(id).map(|field| (table, field)))
    }

    /// Get a segment by id. Archived segments still resolve so that existing
    /// filters keep their names.
    pub fn segment(&self, id: i64) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id == id)
    }

    /// Segments that can be offered for new filters on a table
    pub fn table_segments(&self, table_id: i64) -> Vec<&Segment> {
        self.segments
            .iter()
            .filter(|s| s.table_id == table_id && !s.archived)
            .collect()
    }
}
