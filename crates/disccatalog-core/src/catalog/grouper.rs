/// Partition raw entries by their first path segment under the scan root.
use crate::model::{Entry, Group, GroupKey, RawEntry};
use compact_str::CompactString;
use std::collections::BTreeMap;

/// Group every entry by top-level directory.
///
/// `Rock/Live/a.mp3` lands in group `Rock` as `Live/a.mp3`; `song.mp3` at
/// the root lands in the root group as `song.mp3`. No entry is dropped.
/// The map's iteration order is catalog section order.
pub fn group_entries(raw: Vec<RawEntry>) -> BTreeMap<GroupKey, Group> {
    let mut groups: BTreeMap<GroupKey, Group> = BTreeMap::new();

    for entry in raw {
        let (key, relative_name) = split_segments(&entry.segments);
        groups
            .entry(key.clone())
            .or_insert_with(|| Group::new(key))
            .entries
            .push(Entry {
                kind: entry.kind,
                relative_name,
                locator: entry.locator,
                size_bytes: entry.size_bytes,
                duration: entry.duration,
            });
    }

    groups
}

/// Split root-relative segments into a group key and a group-relative name.
fn split_segments(segments: &[CompactString]) -> (GroupKey, CompactString) {
    match segments {
        [] => (GroupKey::Root, CompactString::default()),
        [file] => (GroupKey::Root, file.clone()),
        [dir, rest @ ..] => {
            let mut name = CompactString::default();
            for (i, part) in rest.iter().enumerate() {
                if i > 0 {
                    name.push('/');
                }
                name.push_str(part);
            }
            (GroupKey::Named(dir.clone()), name)
        }
    }
}
