/// Per-group selection policy: every track, plus the largest cover images.
///
/// Audio is the catalog's content and is always listed in full. Images are
/// cover art: a disc often carries several scans of the same cover, so only
/// the `image_cap` largest are kept. The final list is ordered purely by
/// name; audio and images interleave.
use crate::model::{Entry, Group};
use std::cmp::Ordering;

/// Images kept per group unless configured otherwise.
pub const DEFAULT_IMAGE_CAP: usize = 2;

/// Apply the selection policy to one group.
///
/// An empty result means the group produces no section.
pub fn select_published(group: Group, image_cap: usize) -> Vec<Entry> {
    let (mut published, mut images): (Vec<Entry>, Vec<Entry>) = group
        .entries
        .into_iter()
        .partition(Entry::is_audio);

    images.sort_by(largest_first);
    images.truncate(image_cap);

    published.append(&mut images);
    published.sort_by(|a, b| a.relative_name.cmp(&b.relative_name));
    published
}

/// Size descending, then name ascending so equal sizes resolve the same way
/// on every run.
fn largest_first(a: &Entry, b: &Entry) -> Ordering {
    b.size_bytes
        .cmp(&a.size_bytes)
        .then_with(|| a.relative_name.cmp(&b.relative_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GroupKey, MediaKind};
    use compact_str::CompactString;
    use std::time::Duration;

    fn entry(name: &str, kind: MediaKind, size: u64) -> Entry {
        Entry {
            kind,
            relative_name: CompactString::new(name),
            locator: format!("file:///disc/{name}"),
            size_bytes: size,
            duration: None,
        }
    }

    fn group(entries: Vec<Entry>) -> Group {
        Group {
            key: GroupKey::Named(CompactString::new("Rock")),
            entries,
        }
    }

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.relative_name.as_str()).collect()
    }

    #[test]
    fn keeps_the_two_largest_images() {
        let published = select_published(
            group(vec![
                entry("track1.mp3", MediaKind::Audio, 0),
                entry("cover1.jpg", MediaKind::Image, 500),
                entry("cover2.jpg", MediaKind::Image, 900),
                entry("cover3.jpg", MediaKind::Image, 100),
            ]),
            DEFAULT_IMAGE_CAP,
        );
        assert_eq!(names(&published), ["cover1.jpg", "cover2.jpg", "track1.mp3"]);
    }

    /// Equal sizes are broken by name, independent of input order.
    #[test]
    fn ties_resolve_by_name() {
        let forward = vec![
            entry("a.jpg", MediaKind::Image, 200),
            entry("b.jpg", MediaKind::Image, 200),
            entry("c.jpg", MediaKind::Image, 200),
        ];
        let mut backward = forward.clone();
        backward.reverse();

        let first = select_published(group(forward), DEFAULT_IMAGE_CAP);
        let second = select_published(group(backward), DEFAULT_IMAGE_CAP);
        assert_eq!(names(&first), ["a.jpg", "b.jpg"]);
        assert_eq!(first, second);
    }

    #[test]
    fn audio_is_never_capped() {
        let tracks: Vec<Entry> = (0..40)
            .map(|i| entry(&format!("{i:02}.mp3"), MediaKind::Audio, 0))
            .collect();
        let published = select_published(group(tracks), DEFAULT_IMAGE_CAP);
        assert_eq!(published.len(), 40);
    }

    #[test]
    fn kinds_interleave_by_name() {
        let published = select_published(
            group(vec![
                entry("02 - b.mp3", MediaKind::Audio, 0),
                entry("01 - front.jpg", MediaKind::Image, 10),
                entry("03 - c.mp3", MediaKind::Audio, 0),
            ]),
            DEFAULT_IMAGE_CAP,
        );
        assert_eq!(
            names(&published),
            ["01 - front.jpg", "02 - b.mp3", "03 - c.mp3"]
        );
    }

    /// Kept images are never smaller than a dropped one.
    #[test]
    fn kept_images_dominate_dropped_ones() {
        let sizes = [37u64, 5, 900, 12, 900, 64, 3];
        let entries: Vec<Entry> = sizes
            .iter()
            .enumerate()
            .map(|(i, &s)| entry(&format!("img{i}.jpg"), MediaKind::Image, s))
            .collect();
        let published = select_published(group(entries), DEFAULT_IMAGE_CAP);
        assert_eq!(published.len(), 2);
        assert!(published.iter().all(|e| e.size_bytes == 900));
    }

    #[test]
    fn durations_survive_selection() {
        let mut track = entry("song.mp3", MediaKind::Audio, 0);
        track.duration = Some(Duration::from_secs(185));
        let published = select_published(group(vec![track]), DEFAULT_IMAGE_CAP);
        assert_eq!(published[0].duration, Some(Duration::from_secs(185)));
    }

    #[test]
    fn zero_cap_drops_all_images() {
        let published = select_published(
            group(vec![entry("cover.jpg", MediaKind::Image, 10)]),
            0,
        );
        assert!(published.is_empty());
    }

    #[test]
    fn empty_group_publishes_nothing() {
        assert!(select_published(group(Vec::new()), DEFAULT_IMAGE_CAP).is_empty());
    }
}
