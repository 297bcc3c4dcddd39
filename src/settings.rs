//! Display settings for filter labels
//!
//! Loaded from YAML; every key is optional.
//!
//! ```yaml
//! start_of_week: monday
//! time_style: 24-hour
//! ```

use chrono::Weekday;
use serde::Deserialize;
use std::path::Path;
use crate::error::ParseError;
use crate::parser::read_file;

/// Clock used for times of day in labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum TimeStyle {
    /// `3:45 PM`
    #[default]
    #[serde(rename = "12-hour")]
    TwelveHour,
    /// `15:45`
    #[serde(rename = "24-hour")]
    TwentyFourHour,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormatSettings {
    /// First day of a `week` bucket
    pub start_of_week: Weekday,
    pub time_style: TimeStyle,
    /// Values of a multi-value filter shown before collapsing to "N selections"
    pub max_display_values: usize,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            start_of_week: Weekday::Sun,
            time_style: TimeStyle::TwelveHour,
            max_display_values: 1,
        }
    }
}

impl FormatSettings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        Self::from_yaml_str(&read_file(path)?)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ParseError> {
        serde_yaml::from_str(yaml).map_err(ParseError::from)
    }
}
