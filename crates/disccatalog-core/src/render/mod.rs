/// Document renderers.
///
/// A renderer only reads the [`CatalogDocument`]; it never reorders or
/// filters entries. Output is fully built in memory so the writer can
/// produce the file in a single call.
pub mod export;
pub mod html;

use crate::config::{OutputFormat, StyleOptions};
use crate::error::Result;
use crate::model::CatalogDocument;

/// Render `document` in the requested format.
///
/// `style` only affects HTML output.
pub fn render(
    document: &CatalogDocument,
    format: OutputFormat,
    style: &StyleOptions,
) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Html => Ok(html::render_html(document, style).into_bytes()),
        OutputFormat::Json => export::to_json(document),
        OutputFormat::Csv => export::to_csv(document),
    }
}
