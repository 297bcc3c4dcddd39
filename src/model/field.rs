//! Table and field metadata

use serde::Deserialize;
use super::types::{BaseType, SemanticType};

/// A table with its fields
#[derive(Debug, Clone, Deserialize)]
pub struct Table {
    pub id: i64,
    pub name: String,
    pub display_name: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// A column of a table
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Field {
    pub id: i64,
    pub name: String,
    pub display_name: Option<String>,
    #[serde(default)]
    pub base_type: BaseType,
    pub semantic_type: Option<SemanticType>,
    /// Target of a foreign key field
    pub fk_target_field_id: Option<i64>,
    /// Human-readable description for UIs
    pub description: Option<String>,
}

impl Table {
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    pub fn get_field(&self, id: i64) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Look up a field by its database column name
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl Field {
    /// Display name, defaulting to the column name if not specified
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    pub fn is_date(&self) -> bool {
        self.base_type.is_date()
    }

    pub fn is_time(&self) -> bool {
        self.base_type.is_time()
    }

    pub fn is_numeric(&self) -> bool {
        self.base_type.is_numeric()
    }

    pub fn is_string(&self) -> bool {
        self.base_type == BaseType::Text
    }

    pub fn is_boolean(&self) -> bool {
        self.base_type == BaseType::Boolean
    }

    pub fn is_pk(&self) -> bool {
        self.semantic_type == Some(SemanticType::PrimaryKey)
    }

    pub fn is_fk(&self) -> bool {
        self.semantic_type == Some(SemanticType::ForeignKey) || self.fk_target_field_id.is_some()
    }

    pub fn is_coordinate(&self) -> bool {
        matches!(
            self.semantic_type,
            Some(SemanticType::Latitude) | Some(SemanticType::Longitude)
        )
    }

    pub fn is_latitude(&self) -> bool {
        self.semantic_type == Some(SemanticType::Latitude)
    }

    /// Free-text columns whose values are too long to match exactly
    pub fn is_long_text(&self) -> bool {
        self.is_string()
            && matches!(
                self.semantic_type,
                Some(SemanticType::Description) | Some(SemanticType::Comment)
            )
    }
}
