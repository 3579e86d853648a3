/// Platform-specific functionality: removable volume enumeration and
/// volume naming helpers.
///
/// The catalog pipeline never calls into this module; frontends use it to
/// pick a scan root.
pub mod drives;

pub use drives::{
    first_removable_volume, list_removable_volumes, pick_volume, volume_id, volume_tag,
    VolumeInfo, VolumeKind,
};
