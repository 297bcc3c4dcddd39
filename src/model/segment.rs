//! Saved segments

use serde::Deserialize;

/// A named filter saved independently of any query
#[derive(Debug, Clone, Deserialize)]
pub struct Segment {
    pub id: i64,
    pub name: String,
    pub table_id: i64,
    pub description: Option<String>,
    /// Whether the segment has been retired from the data model
    #[serde(default)]
    pub archived: bool,
}

impl Segment {
    pub fn display_name(&self) -> &str {
        &self.name
    }
}
