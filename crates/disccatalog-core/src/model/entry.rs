/// Catalogued files, before and after grouping.
///
/// A [`RawEntry`] is what the scanner sees: the file's path components
/// relative to the scan root plus its absolute location. An [`Entry`] is the
/// same file once it has been placed in a group and its display name has
/// been made relative to that group.
use compact_str::CompactString;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// The two kinds of file a catalog lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Image,
}

impl MediaKind {
    /// Lowercase label used in exports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Image => "image",
        }
    }
}

/// A classified file discovered by the scanner.
#[derive(Debug, Clone)]
pub struct RawEntry {
    pub kind: MediaKind,
    /// Path components relative to the scan root, in order. Never empty.
    pub segments: Vec<CompactString>,
    /// Absolute filesystem path. Only the duration probe reads this.
    pub path: PathBuf,
    /// Absolute `file://` URI used for links and image sources.
    pub locator: String,
    /// File size for images; always 0 for audio.
    pub size_bytes: u64,
    /// Filled in by [`crate::probe::annotate_durations`] for audio only.
    pub duration: Option<Duration>,
}

/// One file as it appears in a catalog section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub kind: MediaKind,
    /// Path below the group directory, `/`-separated on every platform.
    pub relative_name: CompactString,
    pub locator: String,
    pub size_bytes: u64,
    #[serde(rename = "duration_secs", serialize_with = "super::duration::serialize_secs")]
    pub duration: Option<Duration>,
}

impl Entry {
    #[inline]
    pub fn is_audio(&self) -> bool {
        self.kind == MediaKind::Audio
    }
}
