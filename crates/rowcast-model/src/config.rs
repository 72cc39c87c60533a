//! Declarative transformer configuration.
//!
//! The config arrives as a serialized JSON object and is parsed and
//! validated once, at stage setup, before any record is processed. The
//! `columns` payload must be an array of column specs; handing it an object
//! keyed by column name is a deserialization failure, not a silent reshape.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

fn default_delimiter() -> char {
    ','
}

fn default_quote() -> char {
    '"'
}

/// Declared output column: a name and an optional semantic type string.
///
/// An absent `column_type` means text passthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_type: Option<String>,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: Some(column_type.into()),
        }
    }

    /// A column with no declared type (text passthrough).
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: None,
        }
    }
}

/// Tokenizer and column configuration of one transformer stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformerConfig {
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escape: Option<String>,
    #[serde(default = "default_quote")]
    pub quote: char,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub null_string: Option<String>,
    pub columns: Vec<ColumnSpec>,
}

impl TransformerConfig {
    /// Parses and validates a serialized config payload.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates an already-deserialized JSON value.
    pub fn from_value(raw: serde_json::Value) -> Result<Self> {
        let config: Self = serde_json::from_value(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Structural validation, run before any record is processed.
    pub fn validate(&self) -> Result<()> {
        if let Some(escape) = &self.escape {
            let length = escape.chars().count();
            if length > 1 {
                return Err(ConfigError::EscapeLength { length });
            }
        }
        Ok(())
    }

    /// The configured escape character. Empty or absent escape strings
    /// disable escape processing entirely.
    pub fn escape_char(&self) -> Option<char> {
        self.escape.as_ref().and_then(|escape| escape.chars().next())
    }
}
