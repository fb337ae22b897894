//! JSON output writer.

use std::fs;
use std::path::Path;

use crate::config::OutputConfig;
use crate::error::Result;
use crate::record::MessageRecord;

/// Writes records to a file as a JSON array.
///
/// # Format
/// ```json
/// [{"timestamp":"2023-01-01 12:00:00","username":"Alice","discriminator":"1234","role":"User","message":"hi","attachments":[]}]
/// ```
pub fn write_json(
    records: &[MessageRecord],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let json = to_json(records, config)?;
    fs::write(output_path, json)?;
    Ok(())
}

/// Converts records to a JSON array string.
///
/// Compact unless [`OutputConfig::pretty`] is set. An empty slice gives `[]`.
pub fn to_json(records: &[MessageRecord], config: &OutputConfig) -> Result<String> {
    let json = if config.pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(json)
}
