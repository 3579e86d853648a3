/// Pure-Rust duration probe backed by `symphonia`'s MPEG audio demuxer.
///
/// Works identically on every platform. For files with a Xing/Info/VBRI
/// header the demuxer reports the frame count up front; otherwise the probe
/// walks the packet stream and sums packet durations, which reads the whole
/// file but needs no decoding.
use super::MetadataProbe;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::units::TimeBase;

#[derive(Debug, Clone, Copy, Default)]
pub struct SymphoniaProbe;

impl SymphoniaProbe {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataProbe for SymphoniaProbe {
    fn probe_duration(&self, path: &Path) -> Option<Duration> {
        let file = File::open(path).ok()?;
        let stream = MediaSourceStream::new(Box::new(file), Default::default());

        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                stream,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .ok()?;
        let mut format = probed.format;

        let track = format.default_track()?;
        let track_id = track.id;
        let params = &track.codec_params;
        let time_base = params
            .time_base
            .or_else(|| params.sample_rate.map(|rate| TimeBase::new(1, rate)))?;

        if let Some(frames) = params.n_frames {
            return Some(to_duration(time_base, frames));
        }

        // No frame count in the header: sum the packet durations instead.
        let mut total: u64 = 0;
        loop {
            match format.next_packet() {
                Ok(packet) if packet.track_id() == track_id => total += packet.dur(),
                Ok(_) => {}
                Err(SymphoniaError::IoError(e)) if e.kind() == ErrorKind::UnexpectedEof => break,
                Err(_) => return None,
            }
        }

        (total > 0).then(|| to_duration(time_base, total))
    }
}

fn to_duration(time_base: TimeBase, ts: u64) -> Duration {
    let time = time_base.calc_time(ts);
    Duration::from_secs(time.seconds) + Duration::from_secs_f64(time.frac)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_unknown() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(
            SymphoniaProbe::new().probe_duration(&tmp.path().join("gone.mp3")),
            None
        );
    }

    /// Bytes that are not an MPEG stream must degrade to "unknown", not panic.
    #[test]
    fn garbage_file_is_unknown() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.mp3");
        std::fs::write(&path, b"this is definitely not an mp3 file").unwrap();
        assert_eq!(SymphoniaProbe::new().probe_duration(&path), None);
    }

    #[test]
    fn empty_file_is_unknown() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty.mp3");
        std::fs::write(&path, b"").unwrap();
        assert_eq!(SymphoniaProbe::new().probe_duration(&path), None);
    }

    fn fixture(name: &str) -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    fn assert_close(actual: Option<Duration>, expected_secs: f64) {
        let actual = actual.expect("duration should resolve").as_secs_f64();
        assert!(
            (actual - expected_secs).abs() < 0.05,
            "expected ~{expected_secs}s, got {actual}s"
        );
    }

    /// 100 frames declared in the Xing header, only 12 present: the header
    /// count wins.
    #[test]
    fn xing_frame_count_is_used_when_present() {
        let probed = SymphoniaProbe::new().probe_duration(&fixture("silence_xing.mp3"));
        assert_close(probed, 100.0 * 1152.0 / 44_100.0);
    }

    /// ID3 tag followed by 60 constant-bitrate frames.
    #[test]
    fn tagged_cbr_file_resolves() {
        let probed = SymphoniaProbe::new().probe_duration(&fixture("silence_cbr.mp3"));
        assert_close(probed, 60.0 * 1152.0 / 44_100.0);
    }

    /// Too short for a bitrate estimate, so packet durations are summed.
    #[test]
    fn short_file_sums_packet_durations() {
        let probed = SymphoniaProbe::new().probe_duration(&fixture("silence_short.mp3"));
        assert_close(probed, 12.0 * 1152.0 / 44_100.0);
    }

    #[test]
    fn time_base_conversion() {
        // 44.1 kHz, 185 seconds of samples.
        let tb = TimeBase::new(1, 44_100);
        assert_eq!(to_duration(tb, 185 * 44_100).as_secs(), 185);
    }
}
