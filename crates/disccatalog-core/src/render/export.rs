/// Machine-readable exports of a catalog document.
use crate::error::{CatalogError, Result};
use crate::model::duration::format_duration;
use crate::model::CatalogDocument;
use serde::Serialize;

const CSV_HEADER: [&str; 7] = [
    "label",
    "section",
    "name",
    "kind",
    "size_bytes",
    "duration",
    "locator",
];

/// One CSV line: a published entry with its section context.
#[derive(Serialize)]
struct CsvRow<'a> {
    label: &'a str,
    section: &'a str,
    name: &'a str,
    kind: &'static str,
    size_bytes: u64,
    duration: String,
    locator: &'a str,
}

/// Pretty-printed JSON of the whole document.
pub fn to_json(document: &CatalogDocument) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(document).map_err(|e| CatalogError::Render {
        format: "json",
        message: e.to_string(),
    })
}

/// Flat CSV listing, one row per published entry in document order.
///
/// The header row is always written, even for an empty catalog.
pub fn to_csv(document: &CatalogDocument) -> Result<Vec<u8>> {
    let csv_err = |message: String| CatalogError::Render {
        format: "csv",
        message,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer
        .write_record(CSV_HEADER)
        .map_err(|e| csv_err(e.to_string()))?;

    for section in &document.sections {
        for entry in &section.entries {
            writer
                .serialize(CsvRow {
                    label: &section.label,
                    section: &section.title,
                    name: entry.relative_name.as_str(),
                    kind: entry.kind.label(),
                    size_bytes: entry.size_bytes,
                    duration: entry.duration.map(format_duration).unwrap_or_default(),
                    locator: &entry.locator,
                })
                .map_err(|e| csv_err(e.to_string()))?;
        }
    }

    writer.into_inner().map_err(|e| csv_err(e.to_string()))
}
