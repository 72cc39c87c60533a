//! Tagged value holders.

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::types::ColumnType;

/// A single coerced cell value.
///
/// One variant per semantic holder; consumers switch on the tag rather than
/// downcasting. `UInt64` exists because a signed 64-bit holder cannot cover
/// the unsigned range, and `DateTime` carries the same primitive as
/// `Timestamp` under a distinct tag so the declared column kind survives
/// into the output stream. `Json`, `Geography` and `GeographyPoint` hold
/// their payload as opaque text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Value {
    Null,
    Text(String),
    Binary(Vec<u8>),
    Boolean(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    Decimal(BigDecimal),
    Timestamp(NaiveDateTime),
    DateTime(NaiveDateTime),
    Json(String),
    Geography(String),
    GeographyPoint(String),
}

impl Value {
    /// True for the null sentinel substitution.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The column type this value satisfies, or `None` for `Null`
    /// (which satisfies every nullable column).
    pub fn column_type(&self) -> Option<ColumnType> {
        let column_type = match self {
            Self::Null => return None,
            Self::Text(_) => ColumnType::Text,
            Self::Binary(_) => ColumnType::Binary,
            Self::Boolean(_) => ColumnType::Boolean,
            Self::Int8(_) => ColumnType::Int8,
            Self::Int16(_) => ColumnType::Int16,
            Self::Int32(_) => ColumnType::Int32,
            Self::Int64(_) => ColumnType::Int64,
            Self::UInt64(_) => ColumnType::UInt64,
            Self::Float32(_) => ColumnType::Float32,
            Self::Float64(_) => ColumnType::Float64,
            Self::Decimal(_) => ColumnType::Decimal,
            Self::Timestamp(_) => ColumnType::Timestamp,
            Self::DateTime(_) => ColumnType::DateTime,
            Self::Json(_) => ColumnType::Json,
            Self::Geography(_) => ColumnType::Geography,
            Self::GeographyPoint(_) => ColumnType::GeographyPoint,
        };
        Some(column_type)
    }
}
