//! Type coercion engine.
//!
//! Maps one trimmed field string to its declared semantic type. The null
//! sentinel is checked first and wins under any declared type. Numeric
//! literals are range-checked by parsing into the exact target width;
//! `decimal` keeps big-decimal semantics with no binary rounding. `json`,
//! `geography` and `geographypoint` payloads pass through opaquely, with
//! structural validation deferred to storage.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use rowcast_model::{ColumnType, Value};

use crate::error::CoercionError;

/// Coerces one trimmed field to its column's declared type.
///
/// `null_string` is the configured sentinel; a field equal to it coerces to
/// `Value::Null` regardless of the declared type. Unparseable literals
/// produce a [`CoercionError`] naming the column, raw value, and target
/// type.
pub fn coerce_field(
    value: &str,
    column: &str,
    column_type: ColumnType,
    null_string: Option<&str>,
) -> Result<Value, CoercionError> {
    if null_string == Some(value) {
        return Ok(Value::Null);
    }
    coerce_literal(value, column_type).ok_or_else(|| CoercionError {
        column: column.to_string(),
        value: value.to_string(),
        column_type,
    })
}

fn coerce_literal(value: &str, column_type: ColumnType) -> Option<Value> {
    match column_type {
        ColumnType::Text => Some(Value::Text(value.to_string())),
        ColumnType::Boolean => parse_bool(value).map(Value::Boolean),
        ColumnType::Int8 => value.parse::<i8>().ok().map(Value::Int8),
        ColumnType::Int16 => value.parse::<i16>().ok().map(Value::Int16),
        ColumnType::Int32 => value.parse::<i32>().ok().map(Value::Int32),
        ColumnType::Int64 => value.parse::<i64>().ok().map(Value::Int64),
        ColumnType::UInt64 => value.parse::<u64>().ok().map(Value::UInt64),
        ColumnType::Float32 => value.parse::<f32>().ok().map(Value::Float32),
        ColumnType::Float64 => value.parse::<f64>().ok().map(Value::Float64),
        ColumnType::Decimal => BigDecimal::from_str(value).ok().map(Value::Decimal),
        ColumnType::Date => parse_date(value).map(Value::Timestamp),
        ColumnType::Timestamp => parse_datetime(value).map(Value::Timestamp),
        ColumnType::DateTime => parse_datetime(value).map(Value::DateTime),
        ColumnType::Binary => Some(Value::Binary(value.as_bytes().to_vec())),
        ColumnType::Json => Some(Value::Json(value.to_string())),
        ColumnType::Geography => Some(Value::Geography(value.to_string())),
        ColumnType::GeographyPoint => Some(Value::GeographyPoint(value.to_string())),
    }
}

// Booleans are the lowercase literals only; "TRUE" is not a boolean.
fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Calendar date, widened to a timestamp at midnight.
fn parse_date(value: &str) -> Option<NaiveDateTime> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Bare timestamp, with optional fractional seconds.
fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").ok()
}
