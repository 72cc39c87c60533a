//! Raw-record decoding.

use rowcast_model::RawRecord;

use crate::error::{IngestError, Result};

/// Decodes one raw record to text.
///
/// Text records pass through; byte-sequence records are decoded as UTF-8.
/// A leading byte-order mark is stripped either way so it can never leak
/// into the first field.
pub fn decode_record(record: &RawRecord) -> Result<&str> {
    let raw = match record {
        RawRecord::Text(text) => text.as_str(),
        RawRecord::Binary(bytes) => {
            std::str::from_utf8(bytes).map_err(|source| IngestError::InvalidUtf8 { source })?
        }
    };
    Ok(raw.strip_prefix('\u{feff}').unwrap_or(raw))
}
