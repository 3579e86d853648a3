/// Audio duration probing.
///
/// The pipeline only needs one capability from the platform's media stack:
/// "how long is this file?". It is modelled as the [`MetadataProbe`] trait
/// so a frontend can plug in a native implementation, the bundled
/// [`SymphoniaProbe`], or [`NullProbe`] when durations are not wanted.
///
/// A probe never fails the run. Any problem reading a file degrades that
/// entry to "duration unknown".
pub mod symphonia_probe;

pub use symphonia_probe::SymphoniaProbe;

use crate::model::{MediaKind, RawEntry};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Capability: best-effort playback duration of an audio file.
pub trait MetadataProbe {
    /// Return the duration of the file at `path`, or `None` if it cannot be
    /// determined for any reason. Must not panic.
    fn probe_duration(&self, path: &Path) -> Option<Duration>;
}

/// Probe that never resolves a duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProbe;

impl MetadataProbe for NullProbe {
    fn probe_duration(&self, _path: &Path) -> Option<Duration> {
        None
    }
}

/// Fill in `duration` for every audio entry.
///
/// Returns the annotated entries and the number of audio files whose
/// duration could not be resolved. Images pass through untouched.
pub fn annotate_durations(
    entries: Vec<RawEntry>,
    probe: &dyn MetadataProbe,
) -> (Vec<RawEntry>, usize) {
    let mut unresolved = 0usize;
    let annotated = entries
        .into_iter()
        .map(|mut entry| {
            if entry.kind == MediaKind::Audio {
                entry.duration = probe.probe_duration(&entry.path);
                if entry.duration.is_none() {
                    debug!("Duration unknown for {}", entry.path.display());
                    unresolved += 1;
                }
            }
            entry
        })
        .collect();
    (annotated, unresolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use compact_str::CompactString;
    use std::path::PathBuf;

    struct FixedProbe(Duration);

    impl MetadataProbe for FixedProbe {
        fn probe_duration(&self, _path: &Path) -> Option<Duration> {
            Some(self.0)
        }
    }

    fn raw(name: &str, kind: MediaKind) -> RawEntry {
        RawEntry {
            kind,
            segments: vec![CompactString::new(name)],
            path: PathBuf::from(format!("/disc/{name}")),
            locator: format!("file:///disc/{name}"),
            size_bytes: 0,
            duration: None,
        }
    }

    #[test]
    fn audio_entries_receive_durations() {
        let entries = vec![raw("a.mp3", MediaKind::Audio), raw("b.jpg", MediaKind::Image)];
        let (out, unresolved) = annotate_durations(entries, &FixedProbe(Duration::from_secs(185)));
        assert_eq!(unresolved, 0);
        assert_eq!(out[0].duration, Some(Duration::from_secs(185)));
        assert_eq!(out[1].duration, None, "images are never probed");
    }

    #[test]
    fn null_probe_counts_every_audio_file_as_unresolved() {
        let entries = vec![
            raw("a.mp3", MediaKind::Audio),
            raw("b.mp3", MediaKind::Audio),
            raw("c.jpg", MediaKind::Image),
        ];
        let (out, unresolved) = annotate_durations(entries, &NullProbe);
        assert_eq!(out.len(), 3);
        assert_eq!(unresolved, 2);
    }
}
