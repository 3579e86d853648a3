/// Scan progress reporting.
///
/// Progress is a presentation concern: observers see counters and the most
/// recent path, never the entries themselves, and nothing they do can
/// change what the scan returns.
use crossbeam_channel::Sender;
use std::time::Duration;

/// Progress notifications emitted by [`super::scan_tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanProgress {
    /// Periodic update with the running count of qualifying files.
    Update {
        files_found: u64,
        current_path: String,
    },
    /// The walk finished without error.
    Complete { files_found: u64, duration: Duration },
}

/// Receives progress notifications during a scan.
pub trait ScanObserver {
    fn on_progress(&self, progress: ScanProgress);
}

/// Observer that discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ScanObserver for NoProgress {
    fn on_progress(&self, _progress: ScanProgress) {}
}

/// Forward notifications to a channel, e.g. one drained by a UI thread.
///
/// Uses `try_send`: when a bounded channel is full or the receiver is gone
/// the update is dropped and the scan carries on.
impl ScanObserver for Sender<ScanProgress> {
    fn on_progress(&self, progress: ScanProgress) {
        let _ = self.try_send(progress);
    }
}
