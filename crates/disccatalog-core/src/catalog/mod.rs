/// Catalog stages: turn a flat scan into ordered, labelled sections.
///
/// ```text
/// Vec<RawEntry> ──group_entries──▶ BTreeMap<GroupKey, Group>
///               ──select_published (per group)──▶ Vec<Entry>
///               ──assemble──▶ CatalogDocument
/// ```
///
/// Every function here is pure: no filesystem access, no shared state.
pub mod assembler;
pub mod grouper;
pub mod labels;
pub mod selector;

pub use assembler::{assemble, assemble_at, AssemblyOptions};
pub use grouper::group_entries;
pub use labels::section_label;
pub use selector::{select_published, DEFAULT_IMAGE_CAP};
