/// Order groups, label the non-empty ones, and build the catalog document.
use super::labels::section_label;
use super::selector::{select_published, DEFAULT_IMAGE_CAP};
use crate::model::{CatalogDocument, Group, GroupKey, Section};
use chrono::{DateTime, Local};
use std::collections::BTreeMap;
use tracing::debug;

/// Knobs the assembler needs from the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyOptions {
    /// Images kept per group.
    pub image_cap: usize,
    /// Title shown for the root group's section.
    pub root_title: String,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            image_cap: DEFAULT_IMAGE_CAP,
            root_title: crate::config::DEFAULT_ROOT_TITLE.to_string(),
        }
    }
}

/// Assemble a document stamped with the current local time.
pub fn assemble(
    groups: BTreeMap<GroupKey, Group>,
    volume_id: &str,
    catalog_id: &str,
    options: &AssemblyOptions,
) -> CatalogDocument {
    assemble_at(groups, volume_id, catalog_id, options, Local::now())
}

/// Assemble a document with an explicit generation timestamp.
///
/// Sections follow the map order (root group first, then names ascending).
/// A label is consumed only when a group publishes at least one entry.
pub fn assemble_at(
    groups: BTreeMap<GroupKey, Group>,
    volume_id: &str,
    catalog_id: &str,
    options: &AssemblyOptions,
    generated_at: DateTime<Local>,
) -> CatalogDocument {
    let mut sections: Vec<Section> = Vec::with_capacity(groups.len());

    for (key, group) in groups {
        let title = key
            .name()
            .map_or_else(|| options.root_title.clone(), str::to_string);
        let entries = select_published(group, options.image_cap);
        if entries.is_empty() {
            debug!("Group '{title}' publishes nothing; no label assigned");
            continue;
        }
        sections.push(Section {
            label: section_label(sections.len()),
            title,
            entries,
        });
    }

    CatalogDocument {
        volume_id: volume_id.to_string(),
        catalog_id: catalog_id.to_string(),
        generated_at,
        sections,
    }
}
