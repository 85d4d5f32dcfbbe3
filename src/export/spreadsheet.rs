use std::io::Write;

use log::debug;

use crate::export::format_timestamp;
use crate::history::HistoryRecord;

/// Writes the records as CSV, one row per record.
pub fn write_spreadsheet<W: Write>(records: &[HistoryRecord], writer: W) -> anyhow::Result<()> {
    debug!("writing {} records as csv", records.len());

    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(["kind", "timestamp", "summary"])?;

    for record in records {
        writer.write_record([
            record.kind().to_string().as_str(),
            format_timestamp(record.timestamp()).as_str(),
            record.summary(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}
