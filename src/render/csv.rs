//! CSV projection of output rows.
//!
//! Field-order serialization over already-transformed rows: the 20-column
//! header comes straight from the [`OutputRow`] serde definition. Quoting
//! follows the minimal rule: a field containing a comma, double-quote, or
//! newline is wrapped in double quotes with inner quotes doubled.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{Error, Result};
use crate::model::{OutputRow, COLUMNS};

/// Serialize rows to a CSV string, header first, rows joined by `\n`.
pub fn to_csv(rows: &[OutputRow]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if rows.is_empty() {
        // serde-driven headers are only emitted with the first row
        writer.write_record(COLUMNS)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(Error::Io)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Render(e.to_string()))?;
    let output = String::from_utf8(bytes).map_err(|e| Error::Render(e.to_string()))?;
    Ok(output.trim_end_matches('\n').to_string())
}

/// Build the download filename for a generated BOM.
///
/// `Quote_Number_<number>_BOM_<timestamp>.csv`, where the timestamp is the
/// ISO 8601 instant with colons and dots replaced by dashes so the name is
/// filesystem-safe everywhere.
pub fn csv_filename(quote_number: &str, timestamp: DateTime<Utc>) -> String {
    let stamp = timestamp
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("Quote_Number_{}_BOM_{}.csv", quote_number, stamp)
}

/// Write rows to `<dir>/<csv_filename(...)>` stamped with the current time.
///
/// Returns the path of the written file.
pub fn write_csv_file(
    rows: &[OutputRow],
    quote_number: &str,
    dir: impl AsRef<Path>,
) -> Result<PathBuf> {
    let path = dir.as_ref().join(csv_filename(quote_number, Utc::now()));
    let mut content = to_csv(rows)?;
    content.push('\n');
    fs::write(&path, content)?;
    Ok(path)
}
