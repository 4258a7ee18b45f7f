//! Export of the full entry collection as a downloadable file.
//!
//! JSON output is the same array the repository persists, pretty-printed.
//! CSV output flattens the same fields into one row per entry.

use log::info;

use crate::Entry;

pub const JSON_MIME_TYPE: &str = "application/json";
pub const CSV_MIME_TYPE: &str = "text/csv";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to encode JSON export: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to encode CSV export: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV export is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("Failed to finish CSV export: {0}")]
    Flush(String),
}

/// Pretty-printed JSON array of every entry, two-space indented
pub fn export_json(entries: &[Entry]) -> Result<String, ExportError> {
    let json = serde_json::to_string_pretty(entries)?;
    info!("Exported {} entries as JSON", entries.len());
    Ok(json)
}

/// CSV with header `id,title,amount,category,type,date`
pub fn export_csv(entries: &[Entry]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for entry in entries {
        writer.serialize(entry)?;
    }
    if entries.is_empty() {
        writer.write_record(["id", "title", "amount", "category", "type", "date"])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.to_string()))?;
    info!("Exported {} entries as CSV", entries.len());
    Ok(String::from_utf8(bytes)?)
}
