//! Metadata parser (verb module)
//!
//! Transforms YAML files into model types.

use std::path::Path;
use crate::error::ParseError;
use crate::model::Metadata;

/// Parse metadata from a YAML file
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Metadata, ParseError> {
    parse_str(&read_file(path)?)
}

/// Read a YAML file, keeping the path in the error
pub(crate) fn read_file<P: AsRef<Path>>(path: P) -> Result<String, ParseError> {
    let path_str = path.as_ref().display().to_string();
    std::fs::read_to_string(&path).map_err(|e| ParseError::Io {
        path: path_str,
        source: e,
    })
}

/// Parse metadata from a YAML string
pub fn parse_str(yaml: &str) -> Result<Metadata, ParseError> {
    serde_yaml::from_str(yaml).map_err(ParseError::from)
}
