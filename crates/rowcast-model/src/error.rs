//! Error types for transformer configuration.

use thiserror::Error;

/// Errors raised while parsing or validating a transformer config.
///
/// Both variants are fatal and stop stage construction before any record
/// is processed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed config payload, including a non-array `columns` value.
    #[error("invalid transformer config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Escape must be empty or a single character.
    #[error("invalid escape string: expected 0 or 1 characters, got {length}")]
    EscapeLength { length: usize },
}

/// Result type for config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
