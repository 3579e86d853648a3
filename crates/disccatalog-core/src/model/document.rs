/// The assembled catalog: labelled sections plus header/footer metadata.
use super::entry::Entry;
use chrono::{DateTime, Local};
use serde::Serialize;

/// A labelled, ordered block of entries. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Sequential identifier: `A`, `B`, … `Z`, `AA`, …
    pub label: String,
    /// Group directory name, or the configured root title.
    pub title: String,
    /// Sorted by `relative_name`.
    pub entries: Vec<Entry>,
}

/// Everything a renderer needs for one output document.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogDocument {
    pub volume_id: String,
    pub catalog_id: String,
    pub generated_at: DateTime<Local>,
    pub sections: Vec<Section>,
}

impl CatalogDocument {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of published entries across all sections.
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    /// Labels in document order.
    pub fn labels(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.label.as_str()).collect()
    }

    /// Calendar date shown in the footer.
    pub fn generated_date(&self) -> String {
        self.generated_at.format("%Y-%m-%d").to_string()
    }
}
