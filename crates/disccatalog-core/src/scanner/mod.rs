/// Scanner module: walks a volume and yields classified raw entries.
///
/// [`TreeScanner`] is a lazy iterator over the subtree; [`scan_tree`]
/// materialises it, reports progress to an optional observer, and turns
/// the first filesystem error into a whole-scan failure.
///
/// The walk is single-threaded (`jwalk` in serial mode). Traversal order is
/// not part of the contract; every ordering guarantee comes from the
/// [`crate::catalog`] stages.
pub mod classify;
pub mod progress;
pub mod walk;

pub use classify::{classify_extension, classify_path};
pub use progress::{NoProgress, ScanObserver, ScanProgress};
pub use walk::TreeScanner;

use crate::error::Result;
use crate::model::{MediaKind, RawEntry};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Send a progress update every this many qualifying files.
pub const PROGRESS_INTERVAL: u64 = 10;

/// The materialised result of a successful walk.
#[derive(Debug, Clone)]
pub struct ScanOutput {
    /// Absolute scan root.
    pub root: PathBuf,
    /// Every qualifying file, in traversal order.
    pub entries: Vec<RawEntry>,
    /// Wall-clock time spent walking.
    pub elapsed: Duration,
}

impl ScanOutput {
    /// Number of `.mp3`/`.jpg` files found.
    pub fn files_seen(&self) -> usize {
        self.entries.len()
    }

    /// Count of entries of the given kind.
    pub fn count_of(&self, kind: MediaKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }
}

/// Walk `root` to completion.
///
/// Returns `ScanFailure` on the first error; entries collected up to that
/// point are dropped with the partial vector.
pub fn scan_tree(root: &Path, observer: &dyn ScanObserver) -> Result<ScanOutput> {
    let start = Instant::now();
    let scanner = TreeScanner::new(root)?;
    let root = scanner.root().to_path_buf();
    info!("Scanning {}", root.display());

    let mut entries: Vec<RawEntry> = Vec::new();
    let mut files_found: u64 = 0;

    for item in scanner {
        let entry = item?;
        files_found += 1;
        if files_found % PROGRESS_INTERVAL == 0 {
            observer.on_progress(ScanProgress::Update {
                files_found,
                current_path: entry.path.to_string_lossy().into_owned(),
            });
        }
        entries.push(entry);
    }

    let elapsed = start.elapsed();
    debug!("Scan walk complete: {files_found} media files in {elapsed:?}");
    observer.on_progress(ScanProgress::Complete {
        files_found,
        duration: elapsed,
    });

    Ok(ScanOutput {
        root,
        entries,
        elapsed,
    })
}
