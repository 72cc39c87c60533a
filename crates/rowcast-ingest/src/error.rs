//! Error types for raw-record decoding.

use thiserror::Error;

/// Errors that can occur while decoding a raw record.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Byte-sequence record that is not UTF-8-decodable text.
    #[error("record is not valid UTF-8: {source}")]
    InvalidUtf8 {
        #[source]
        source: std::str::Utf8Error,
    },
}

/// Result type for decoding operations.
pub type Result<T> = std::result::Result<T, IngestError>;
