//! Type definitions for field metadata

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// BaseType
// ============================================================================

/// Storage type of a field, as reported by the database sync (`type/Integer`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BaseType {
    Integer,
    BigInteger,
    Float,
    Decimal,
    Text,
    Boolean,
    Date,
    DateTime,
    DateTimeWithTz,
    Time,
    /// Any type this crate has no filter operators for
    #[default]
    Other,
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BaseType::Integer => "type/Integer",
            BaseType::BigInteger => "type/BigInteger",
            BaseType::Float => "type/Float",
            BaseType::Decimal => "type/Decimal",
            BaseType::Text => "type/Text",
            BaseType::Boolean => "type/Boolean",
            BaseType::Date => "type/Date",
            BaseType::DateTime => "type/DateTime",
            BaseType::DateTimeWithTz => "type/DateTimeWithTZ",
            BaseType::Time => "type/Time",
            BaseType::Other => "type/*",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for BaseType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_prefix("type/").unwrap_or(s);
        Ok(match name {
            "Integer" => BaseType::Integer,
            "BigInteger" => BaseType::BigInteger,
            "Float" => BaseType::Float,
            "Decimal" => BaseType::Decimal,
            "Text" => BaseType::Text,
            "Boolean" => BaseType::Boolean,
            "Date" => BaseType::Date,
            "DateTime" => BaseType::DateTime,
            "DateTimeWithTZ" | "DateTimeWithLocalTZ" | "DateTimeWithZoneOffset" => {
                BaseType::DateTimeWithTz
            }
            "Time" | "TimeWithLocalTZ" => BaseType::Time,
            _ => BaseType::Other,
        })
    }
}

impl<'de> Deserialize<'de> for BaseType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BaseType::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for BaseType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl BaseType {
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            BaseType::Integer | BaseType::BigInteger | BaseType::Float | BaseType::Decimal
        )
    }

    /// Date or date-time types. Time-only fields are not dates.
    pub fn is_date(&self) -> bool {
        matches!(self, BaseType::Date | BaseType::DateTime | BaseType::DateTimeWithTz)
    }

    pub fn is_time(&self) -> bool {
        matches!(self, BaseType::Time)
    }
}

// ============================================================================
// SemanticType
// ============================================================================

/// What a field means, independent of how it is stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticType {
    PrimaryKey,
    ForeignKey,
    Latitude,
    Longitude,
    Description,
    Comment,
    Category,
    Name,
    CreationTimestamp,
    Other(String),
}

impl From<&str> for SemanticType {
    fn from(s: &str) -> Self {
        match s.strip_prefix("type/").unwrap_or(s) {
            "PK" => SemanticType::PrimaryKey,
            "FK" => SemanticType::ForeignKey,
            "Latitude" => SemanticType::Latitude,
            "Longitude" => SemanticType::Longitude,
            "Description" => SemanticType::Description,
            "Comment" => SemanticType::Comment,
            "Category" => SemanticType::Category,
            "Name" => SemanticType::Name,
            "CreationTimestamp" => SemanticType::CreationTimestamp,
            other => SemanticType::Other(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for SemanticType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SemanticType::from(s.as_str()))
    }
}

// ============================================================================
// TemporalUnit
// ============================================================================

/// Date truncation or extraction applied to a date/time field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
    MinuteOfHour,
    HourOfDay,
    DayOfWeek,
    DayOfMonth,
    DayOfYear,
    WeekOfYear,
    MonthOfYear,
    QuarterOfYear,
}

impl TemporalUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemporalUnit::Minute => "minute",
            TemporalUnit::Hour => "hour",
            TemporalUnit::Day => "day",
            TemporalUnit::Week => "week",
            TemporalUnit::Month => "month",
            TemporalUnit::Quarter => "quarter",
            TemporalUnit::Year => "year",
            TemporalUnit::MinuteOfHour => "minute-of-hour",
            TemporalUnit::HourOfDay => "hour-of-day",
            TemporalUnit::DayOfWeek => "day-of-week",
            TemporalUnit::DayOfMonth => "day-of-month",
            TemporalUnit::DayOfYear => "day-of-year",
            TemporalUnit::WeekOfYear => "week-of-year",
            TemporalUnit::MonthOfYear => "month-of-year",
            TemporalUnit::QuarterOfYear => "quarter-of-year",
        }
    }

    /// Units that truncate to a span longer than a day
    pub fn is_coarse(&self) -> bool {
        matches!(
            self,
            TemporalUnit::Week | TemporalUnit::Month | TemporalUnit::Quarter | TemporalUnit::Year
        )
    }

    /// Units that keep a time-of-day component
    pub fn is_time_of_day(&self) -> bool {
        matches!(self, TemporalUnit::Minute | TemporalUnit::Hour)
    }

    /// Units a date range label can be rendered at
    pub fn is_range_unit(&self) -> bool {
        *self == TemporalUnit::Day || self.is_coarse()
    }
}

impl fmt::Display for TemporalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when parsing a temporal unit string
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown temporal unit '{input}'")]
pub struct ParseTemporalUnitError {
    pub input: String,
}

impl FromStr for TemporalUnit {
    type Err = ParseTemporalUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minute" => Ok(TemporalUnit::Minute),
            "hour" => Ok(TemporalUnit::Hour),
            "day" => Ok(TemporalUnit::Day),
            "week" => Ok(TemporalUnit::Week),
            "month" => Ok(TemporalUnit::Month),
            "quarter" => Ok(TemporalUnit::Quarter),
            "year" => Ok(TemporalUnit::Year),
            "minute-of-hour" => Ok(TemporalUnit::MinuteOfHour),
            "hour-of-day" => Ok(TemporalUnit::HourOfDay),
            "day-of-week" => Ok(TemporalUnit::DayOfWeek),
            "day-of-month" => Ok(TemporalUnit::DayOfMonth),
            "day-of-year" => Ok(TemporalUnit::DayOfYear),
            "week-of-year" => Ok(TemporalUnit::WeekOfYear),
            "month-of-year" => Ok(TemporalUnit::MonthOfYear),
            "quarter-of-year" => Ok(TemporalUnit::QuarterOfYear),
            _ => Err(ParseTemporalUnitError { input: s.to_string() }),
        }
    }
}

impl<'de> Deserialize<'de> for TemporalUnit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TemporalUnit::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for TemporalUnit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
