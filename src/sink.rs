//! Tabular record sink and diagnostic snapshot writer.
//!
//! The sink is the one place a scan can actually fail: losing the output
//! file is total loss, so unlike every upstream stage these errors
//! surface to the caller.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::result::ExtractedRecord;

/// Fixed column order of the tabular output.
const HEADER: [&str; 6] = ["name", "email", "phone_number", "location", "url", "text"];

/// Serializes `records` to `destination` as CSV.
///
/// The header row is always written, even for an empty record sequence,
/// so the row count below it equals the number of successfully processed
/// nodes. Standard quoting applies to fields containing the delimiter or
/// line breaks.
pub fn write_records(records: &[ExtractedRecord], destination: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(destination)?;

    writer.write_record(HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(csv::Error::from)?;

    tracing::info!(rows = records.len(), destination = %destination.display(), "records written");
    Ok(())
}

/// Writes the raw document dump to `destination`.
///
/// Used only on the zero-nodes-found condition, to distinguish "nothing
/// to scan" from "scanned but extracted nothing".
pub fn write_diagnostic(raw: &str, destination: &Path) -> Result<()> {
    fs::write(destination, raw).map_err(Error::Diagnostic)?;
    tracing::info!(bytes = raw.len(), destination = %destination.display(), "diagnostic snapshot written");
    Ok(())
}
