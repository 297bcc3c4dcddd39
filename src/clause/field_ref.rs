//! Field references (`["field", id-or-name, options]`)

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use crate::model::TemporalUnit;

/// How a field reference identifies its column
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldId {
    /// Field from table metadata
    Id(i64),
    /// Column of a nested query, identified by name
    Name(String),
}

/// Options map of a field reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldOptions {
    #[serde(rename = "temporal-unit", default, skip_serializing_if = "Option::is_none")]
    pub temporal_unit: Option<TemporalUnit>,
    #[serde(rename = "base-type", default, skip_serializing_if = "Option::is_none")]
    pub base_type: Option<String>,
    /// Foreign key field this reference is reached through
    #[serde(rename = "source-field", default, skip_serializing_if = "Option::is_none")]
    pub source_field: Option<i64>,
    #[serde(rename = "join-alias", default, skip_serializing_if = "Option::is_none")]
    pub join_alias: Option<String>,
    /// Options this crate does not interpret, kept so they survive a round trip
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldOptions {
    pub fn is_empty(&self) -> bool {
        self.temporal_unit.is_none()
            && self.base_type.is_none()
            && self.source_field.is_none()
            && self.join_alias.is_none()
            && self.extra.is_empty()
    }
}

/// A reference to a column, as it appears in MBQL
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRef {
    pub id: FieldId,
    pub options: FieldOptions,
}

impl FieldRef {
    pub fn id(id: i64) -> Self {
        Self {
            id: FieldId::Id(id),
            options: FieldOptions::default(),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: FieldId::Name(name.into()),
            options: FieldOptions::default(),
        }
    }

    pub fn with_temporal_unit(mut self, unit: TemporalUnit) -> Self {
        self.options.temporal_unit = Some(unit);
        self
    }

    pub fn with_source_field(mut self, fk_field_id: i64) -> Self {
        self.options.source_field = Some(fk_field_id);
        self
    }

    pub fn temporal_unit(&self) -> Option<TemporalUnit> {
        self.options.temporal_unit
    }

    /// Parse `["field", 10, {...}]`, `["field", "TOTAL", {...}]` or the legacy
    /// `["field", 10, null]`. Returns `None` for anything else.
    pub fn from_mbql(value: &Value) -> Option<Self> {
        let items = value.as_array()?;
        if items.len() < 2 || items.len() > 3 || items[0].as_str() != Some("field") {
            return None;
        }
        let id = match &items[1] {
            Value::Number(n) => FieldId::Id(n.as_i64()?),
            Value::String(s) => FieldId::Name(s.clone()),
            _ => return None,
        };
        let options = match items.get(2) {
            None | Some(Value::Null) => FieldOptions::default(),
            Some(opts @ Value::Object(_)) => serde_json::from_value(opts.clone()).ok()?,
            Some(_) => return None,
        };
        Some(Self { id, options })
    }

    pub fn to_mbql(&self) -> Value {
        let id = match &self.id {
            FieldId::Id(id) => json!(id),
            FieldId::Name(name) => json!(name),
        };
        let options = if self.options.is_empty() {
            Value::Null
        } else {
            serde_json::to_value(&self.options).unwrap_or(Value::Null)
        };
        json!(["field", id, options])
    }
}

impl Serialize for FieldRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_mbql().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FieldRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        FieldRef::from_mbql(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("not a field reference: {}", value)))
    }
}
