//! Error taxonomy of the transformer stage.
//!
//! Two tiers: fatal, synchronous errors raised once at stage construction
//! (`Config`, `SchemaPrecondition`), and per-record errors raised while
//! transforming (`Decode`, `RowParse`, `Coercion`). The stage surfaces the
//! typed failure and stops there; whether the enclosing pipeline skips,
//! retries, or aborts is its policy, not ours.

use rowcast_ingest::IngestError;
use rowcast_model::{ColumnType, ConfigError};
use thiserror::Error;

/// A single field that could not be coerced to its declared type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot coerce value '{value}' in column '{column}' to type {column_type}")]
pub struct CoercionError {
    pub column: String,
    pub value: String,
    pub column_type: ColumnType,
}

/// Errors raised by the transformer stage.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Invalid transformer config; stops stage construction.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Input stream shape violates the stage contract; stops stage
    /// construction. Evaluated once, never per record.
    #[error("The first column of the input stream should be either text or binary type.")]
    SchemaPrecondition,

    /// Byte-sequence record that could not be decoded to text.
    #[error(transparent)]
    Decode(#[from] IngestError),

    /// Tokenized field count does not match the declared column count.
    #[error("row has {actual} fields, expected {expected}")]
    RowParse { expected: usize, actual: usize },

    /// One or more fields of a record failed coercion. A record either
    /// coerces fully or fails; there is no partial success.
    #[error("{} coercion error(s) in record: {}", .0.len(), format_coercion_errors(.0))]
    Coercion(Vec<CoercionError>),
}

fn format_coercion_errors(errors: &[CoercionError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for transformer operations.
pub type Result<T> = std::result::Result<T, TransformError>;
