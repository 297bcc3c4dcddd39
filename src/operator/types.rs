//! Filter operator metadata types

use serde_json::{Map, Value};

/// Kind of value an operator argument expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentType {
    Number,
    Text,
    Date,
    Boolean,
    Coordinate,
    /// Another column, e.g. the longitude field of `inside`
    Field,
}

/// Declared shape of one operator argument
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentSpec {
    pub arg_type: ArgumentType,
    pub default: Option<Value>,
}

impl ArgumentSpec {
    pub fn new(arg_type: ArgumentType) -> Self {
        Self {
            arg_type,
            default: None,
        }
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }
}

/// How one argument is shown in a filter label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Left out of labels entirely
    pub hide: bool,
    /// Numbers are rounded to two decimals
    pub compact: bool,
}

/// A named predicate a dimension can be filtered with
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOperator {
    pub name: String,
    /// Label in operator pickers ("Greater than")
    pub verbose_name: String,
    /// Label inside sentences ("is greater than")
    pub more_verbose_name: String,
    /// Required arguments. For `multi` operators the single spec applies to every value.
    pub fields: Vec<ArgumentSpec>,
    /// Accepts any number of values of `fields[0]`'s type
    pub multi: bool,
    pub options_defaults: Option<Map<String, Value>>,
    pub format_options: Vec<FormatOptions>,
}

impl FilterOperator {
    pub fn new(name: &str, verbose_name: &str, more_verbose_name: &str, fields: Vec<ArgumentSpec>) -> Self {
        Self {
            name: name.to_string(),
            verbose_name: verbose_name.to_string(),
            more_verbose_name: more_verbose_name.to_string(),
            fields,
            multi: false,
            options_defaults: None,
            format_options: Vec::new(),
        }
    }

    pub fn multi(mut self) -> Self {
        self.multi = true;
        self
    }

    pub fn with_options_defaults(mut self, defaults: Map<String, Value>) -> Self {
        self.options_defaults = Some(defaults);
        self
    }

    pub fn with_format_options(mut self, format_options: Vec<FormatOptions>) -> Self {
        self.format_options = format_options;
        self
    }

    /// Argument spec governing the value at `index`
    pub fn argument_spec(&self, index: usize) -> Option<&ArgumentSpec> {
        if self.multi {
            self.fields.first()
        } else {
            self.fields.get(index)
        }
    }

    /// Format options for the argument at `index`; multi-value operators share the first entry
    pub fn argument_format_options(&self, index: usize) -> FormatOptions {
        let slot = if self.multi { 0 } else { index };
        self.format_options.get(slot).copied().unwrap_or_default()
    }
}
