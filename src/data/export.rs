use std::io::Write;

use thiserror::Error;

use super::model::Row;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("writing CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the header and every row, values verbatim, in the given order.
/// Fields a row does not carry are written empty.
pub fn write_csv<W: Write>(headers: &[String], rows: &[&Row], out: W) -> Result<(), ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(out);

    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(headers.iter().map(|h| row.get(h).unwrap_or("")))?;
    }
    writer.flush()?;
    Ok(())
}

/// The projection as CSV bytes, ready to be saved.
pub fn to_csv_bytes(headers: &[String], rows: &[&Row]) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    write_csv(headers, rows, &mut buf)?;
    Ok(buf)
}
