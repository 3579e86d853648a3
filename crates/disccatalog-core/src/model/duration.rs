/// Track duration display and serialisation helpers.
use serde::Serializer;
use std::time::Duration;

/// Format a playback duration as `MM:SS`.
///
/// Sub-second remainders are truncated. Minutes are zero-padded to two
/// digits but are not capped, so a 2-hour recording renders as `120:00`.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Serialise an optional duration as whole seconds (or `null`).
pub fn serialize_secs<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(d) => serializer.serialize_some(&d.as_secs()),
        None => serializer.serialize_none(),
    }
}
