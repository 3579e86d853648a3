/// Groups: entries sharing the same top-level directory under the scan root.
use super::entry::Entry;
use compact_str::CompactString;

/// Identifies a group.
///
/// Variant order matters: the derived `Ord` places `Root` before every
/// `Named` key, and named keys compare as plain strings. A
/// `BTreeMap<GroupKey, _>` therefore iterates in catalog section order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupKey {
    /// Files placed directly in the scan root.
    Root,
    /// Files below the top-level directory with this name.
    Named(CompactString),
}

impl GroupKey {
    /// Directory name for named groups, `None` for the root group.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Root => None,
            Self::Named(name) => Some(name.as_str()),
        }
    }
}

/// A bucket of entries in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub key: GroupKey,
    pub entries: Vec<Entry>,
}

impl Group {
    pub fn new(key: GroupKey) -> Self {
        Self {
            key,
            entries: Vec::new(),
        }
    }
}
