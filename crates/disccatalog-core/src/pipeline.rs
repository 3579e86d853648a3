/// End-to-end orchestration of one catalog run.
///
/// ```text
/// scan_tree ─▶ annotate_durations ─▶ group_entries ─▶ assemble ─▶ render ─▶ write
/// ```
///
/// Each stage takes ownership of the previous stage's output. A fatal error
/// at any point returns before the output file is touched, so a failed scan
/// never leaves a partial catalog behind.
use crate::catalog::{assemble, group_entries};
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::model::size::{format_count, format_size};
use crate::model::{CatalogDocument, MediaKind};
use crate::output::write_document;
use crate::platform;
use crate::probe::{annotate_durations, MetadataProbe};
use crate::render::render;
use crate::scanner::{scan_tree, ScanObserver};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// What to catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRequest {
    /// Volume root to scan.
    pub root: PathBuf,
    /// Caller's catalog number, shown in the header and footer.
    pub catalog_id: String,
    /// Volume identifier shown in the header.
    pub volume_id: String,
}

impl CatalogRequest {
    /// Request for `root`, identified in the header by its path.
    pub fn new(root: impl Into<PathBuf>, catalog_id: impl Into<String>) -> Self {
        let root = root.into();
        let volume_id = platform::volume_id(&root);
        Self {
            root,
            catalog_id: catalog_id.into(),
            volume_id,
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct CatalogReport {
    pub document: CatalogDocument,
    /// Qualifying (`.mp3`/`.jpg`) files found on the volume.
    pub files_seen: usize,
    /// Audio files whose duration could not be determined.
    pub unresolved_durations: usize,
}

/// Scan, group, select and assemble. Nothing is rendered or written.
pub fn build_catalog(
    request: &CatalogRequest,
    config: &CatalogConfig,
    probe: &dyn MetadataProbe,
    observer: &dyn ScanObserver,
) -> Result<CatalogReport> {
    if request.catalog_id.trim().is_empty() {
        return Err(CatalogError::EmptyCatalogId);
    }
    info!(
        "Building catalog {} for {}",
        request.catalog_id,
        request.root.display()
    );

    let scan = scan_tree(&request.root, observer)?;
    let files_seen = scan.files_seen();
    let image_bytes: u64 = scan
        .entries
        .iter()
        .filter(|e| e.kind == MediaKind::Image)
        .map(|e| e.size_bytes)
        .sum();
    info!(
        "Found {} audio and {} image files ({} of images) in {:?}",
        format_count(scan.count_of(MediaKind::Audio) as u64),
        format_count(scan.count_of(MediaKind::Image) as u64),
        format_size(image_bytes),
        scan.elapsed
    );

    let (entries, unresolved_durations) = annotate_durations(scan.entries, probe);
    if unresolved_durations > 0 {
        warn!("{unresolved_durations} durations unresolved");
    }

    let groups = group_entries(entries);
    let document = assemble(
        groups,
        &request.volume_id,
        &request.catalog_id,
        &config.assembly_options(),
    );
    info!(
        "Assembled {} sections with {} entries",
        document.sections.len(),
        document.entry_count()
    );

    Ok(CatalogReport {
        document,
        files_seen,
        unresolved_durations,
    })
}

/// Build the catalog, render it in the configured format and write it to
/// `output_path`.
pub fn generate(
    request: &CatalogRequest,
    config: &CatalogConfig,
    probe: &dyn MetadataProbe,
    observer: &dyn ScanObserver,
    output_path: &Path,
) -> Result<CatalogReport> {
    let report = build_catalog(request, config, probe, observer)?;
    let bytes = render(&report.document, config.format, &config.style)?;
    write_document(output_path, &bytes)?;
    info!(
        "Catalog written to {} ({})",
        output_path.display(),
        format_size(bytes.len() as u64)
    );
    Ok(report)
}
