/// Data model for a catalog run.
///
/// Each pipeline stage produces one of these owned values and hands it to
/// the next stage; nothing here is shared or mutated across stages.
pub mod document;
pub mod duration;
pub mod entry;
pub mod group;
pub mod size;

pub use document::{CatalogDocument, Section};
pub use entry::{Entry, MediaKind, RawEntry};
pub use group::{Group, GroupKey};
