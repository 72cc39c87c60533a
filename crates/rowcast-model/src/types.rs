//! Semantic column types.
//!
//! A [`ColumnType`] is the target of a coercion: the declared type string of
//! a column, normalized and resolved against the fixed type set. Several
//! declared identifiers map onto one target (`int`/`integer`, `bool`/
//! `boolean`); unrecognized identifiers are not an error and resolve to
//! nothing here, leaving the lenient text fallback to the caller.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Target semantic type of a column.
///
/// Integer widths follow the declared signed width; `bigint unsigned` gets
/// its own variant because a signed 64-bit holder cannot represent the full
/// range. `DateTime` parses identically to `Timestamp` but is carried as a
/// distinct kind so downstream consumers can tell the declared column kinds
/// apart. `Json`, `Geography` and `GeographyPoint` are opaque text payloads
/// whose structural validation is deferred to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Text,
    Boolean,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt64,
    Float32,
    Float64,
    Decimal,
    Date,
    Timestamp,
    DateTime,
    Binary,
    Json,
    Geography,
    GeographyPoint,
}

impl ColumnType {
    /// Resolves a declared type string against the fixed type set.
    ///
    /// The string is normalized first: lowercased, surrounding whitespace
    /// trimmed, inner whitespace collapsed to single spaces (so
    /// `"BIGINT  UNSIGNED"` matches). Returns `None` for identifiers
    /// outside the set; callers decide the fallback policy.
    pub fn parse(declared: &str) -> Option<Self> {
        let normalized = declared
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        let column_type = match normalized.as_str() {
            "string" | "text" => Self::Text,
            "bool" | "boolean" => Self::Boolean,
            "byte" => Self::Int8,
            "short" => Self::Int16,
            "int" | "integer" => Self::Int32,
            "bigint" => Self::Int64,
            "bigint unsigned" => Self::UInt64,
            "float" => Self::Float32,
            "double" => Self::Float64,
            "decimal" => Self::Decimal,
            "date" => Self::Date,
            "timestamp" => Self::Timestamp,
            "datetime" => Self::DateTime,
            "binary" => Self::Binary,
            "json" => Self::Json,
            "geography" => Self::Geography,
            "geographypoint" => Self::GeographyPoint,
            _ => return None,
        };
        Some(column_type)
    }

    /// True for the two stream types a raw input column may carry.
    pub fn is_text_or_binary(self) -> bool {
        matches!(self, Self::Text | Self::Binary)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Boolean => "boolean",
            Self::Int8 => "byte",
            Self::Int16 => "short",
            Self::Int32 => "int",
            Self::Int64 => "bigint",
            Self::UInt64 => "bigint unsigned",
            Self::Float32 => "float",
            Self::Float64 => "double",
            Self::Decimal => "decimal",
            Self::Date => "date",
            Self::Timestamp => "timestamp",
            Self::DateTime => "datetime",
            Self::Binary => "binary",
            Self::Json => "json",
            Self::Geography => "geography",
            Self::GeographyPoint => "geographypoint",
        };
        f.write_str(name)
    }
}
