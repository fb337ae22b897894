//! JSON Lines (JSONL) output writer.
//!
//! One record per line, for line-oriented tools (`jq -c`, `grep`, log
//! shippers).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::OutputConfig;
use crate::error::Result;
use crate::record::MessageRecord;

/// Writes records to a JSONL file.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"timestamp":"2023-01-01 12:00:00","username":"Alice","discriminator":"1234","role":"User","message":"hi","attachments":[]}
/// ```
pub fn write_jsonl(
    records: &[MessageRecord],
    output_path: impl AsRef<Path>,
    _config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string. Every line, including the last, ends
/// with `\n`.
pub fn to_jsonl(records: &[MessageRecord], _config: &OutputConfig) -> Result<String> {
    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    Ok(out)
}
