/// Extension-based classification.
///
/// Only two extensions matter: `mp3` (audio) and `jpg` (cover art). The
/// comparison is ASCII case-insensitive and never allocates. Everything
/// else, including `jpeg` and `png`, is not catalogued.
use crate::model::MediaKind;
use std::path::Path;

/// Classify a bare extension (without the leading dot).
pub fn classify_extension(ext: &str) -> Option<MediaKind> {
    if ext.eq_ignore_ascii_case("mp3") {
        Some(MediaKind::Audio)
    } else if ext.eq_ignore_ascii_case("jpg") {
        Some(MediaKind::Image)
    } else {
        None
    }
}

/// Classify a path by its final extension.
///
/// Non-UTF-8 extensions cannot match and yield `None`.
pub fn classify_path(path: &Path) -> Option<MediaKind> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(classify_extension)
}
