//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::config::OutputConfig;
use crate::error::{ModlogError, Result};
use crate::record::MessageRecord;

const HEADER: [&str; 6] = [
    "Timestamp",
    "Username",
    "Discriminator",
    "Role",
    "Message",
    "Attachments",
];

/// Separator between attachment tokens inside the `Attachments` column.
const ATTACHMENT_JOIN: &str = ",";

/// Writes records to a CSV file.
///
/// # Format
/// - Delimiter: [`OutputConfig::delimiter`] (default `;`)
/// - Columns: `Timestamp`, `Username`, `Discriminator`, `Role`, `Message`, `Attachments`
/// - Attachments are joined with `,` in one column
/// - Encoding: UTF-8
pub fn write_csv(
    records: &[MessageRecord],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(file, records, config)
}

/// Converts records to a CSV string.
pub fn to_csv(records: &[MessageRecord], config: &OutputConfig) -> Result<String> {
    let mut buf = Vec::new();
    write_records(&mut buf, records, config)?;
    String::from_utf8(buf).map_err(|e| ModlogError::invalid_format("CSV", e.to_string()))
}

fn write_records<W: Write>(out: W, records: &[MessageRecord], config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .from_writer(out);

    writer.write_record(HEADER)?;

    for record in records {
        writer.write_record([
            record.timestamp.as_str(),
            record.username.as_str(),
            record.discriminator.as_str(),
            record.role.as_str(),
            record.message.as_str(),
            record.attachments.join(ATTACHMENT_JOIN).as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
