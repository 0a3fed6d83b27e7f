//! Decoders for the YAML and JSON redirect list formats.
//!
//! Both formats describe the same thing, a sequence of `path`/`url` pairs:
//!
//! ```yaml
//! - path: /some-path
//!   url: https://www.some-url.com/demo
//! ```
//!
//! ```json
//! [{"path": "/some-path", "url": "https://www.some-url.com/demo"}]
//! ```

use crate::error::DecodeError;
use crate::models::Record;

/// Decode a YAML sequence of records
///
/// An empty or whitespace-only document decodes to no records.
pub fn decode_yaml(raw: &[u8]) -> Result<Vec<Record>, DecodeError> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let records: Vec<Record> = serde_yaml::from_slice(raw)?;
    tracing::debug!("Decoded {} records from YAML", records.len());
    Ok(records)
}

/// Decode a JSON array of records
pub fn decode_json(raw: &[u8]) -> Result<Vec<Record>, DecodeError> {
    let records: Vec<Record> = serde_json::from_slice(raw)?;
    tracing::debug!("Decoded {} records from JSON", records.len());
    Ok(records)
}
