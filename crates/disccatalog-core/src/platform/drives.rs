/// Removable volume enumeration.
///
/// On Windows this walks the logical drive strings and classifies each with
/// `GetDriveTypeW`. Elsewhere it asks `sysinfo` for mounted disks and treats
/// optical filesystems (ISO 9660, UDF) as discs. Drives without inserted
/// media are skipped on every platform.
use crate::error::{CatalogError, Result};
use std::path::{Path, PathBuf};

/// Kind of removable media. Discs sort before other removable drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VolumeKind {
    /// CD/DVD/Blu-ray.
    Optical,
    /// USB sticks, card readers and similar.
    Removable,
}

impl VolumeKind {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Optical => "CD/DVD",
            Self::Removable => "Removable",
        }
    }
}

/// A mounted removable volume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeInfo {
    /// Mount point, e.g. `D:\` or `/media/user/DISC`.
    pub path: PathBuf,
    /// Volume label; may be empty.
    pub label: String,
    pub kind: VolumeKind,
}

/// List mounted removable volumes, discs first, then by mount point.
pub fn list_removable_volumes() -> Vec<VolumeInfo> {
    let mut volumes = enumerate();
    volumes.retain(|v| v.path.is_dir());
    volumes.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.path.cmp(&b.path)));
    volumes
}

/// The volume a catalog run should scan by default.
pub fn first_removable_volume() -> Result<VolumeInfo> {
    pick_volume(list_removable_volumes())
}

/// First volume of an already ordered list, or `VolumeUnavailable`.
pub fn pick_volume(volumes: Vec<VolumeInfo>) -> Result<VolumeInfo> {
    volumes
        .into_iter()
        .next()
        .ok_or(CatalogError::VolumeUnavailable)
}

/// Identifier printed in the catalog header: the root as the user sees it.
pub fn volume_id(root: &Path) -> String {
    root.display().to_string()
}

/// Short, filename-safe tag for a volume root.
///
/// Drive roots yield their letter (`D:\` → `D`); mount points yield their
/// last component with anything outside `[A-Za-z0-9_-]` replaced by `_`.
pub fn volume_tag(root: &Path) -> String {
    let text = root.to_string_lossy();
    let bytes = text.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        return (bytes[0].to_ascii_uppercase() as char).to_string();
    }

    let tag: String = root
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if tag.is_empty() {
        "ROOT".to_string()
    } else {
        tag
    }
}

#[cfg(windows)]
fn enumerate() -> Vec<VolumeInfo> {
    use std::ffi::OsString;
    use std::os::windows::ffi::OsStringExt;
    use windows::Win32::Storage::FileSystem::{
        GetDriveTypeW, GetLogicalDriveStringsW, GetVolumeInformationW,
    };

    // Drive type constants from the Windows API.
    const DRIVE_REMOVABLE_VAL: u32 = 2;
    const DRIVE_CDROM_VAL: u32 = 5;

    let mut volumes = Vec::new();

    // GetLogicalDriveStringsW returns null-separated drive root strings.
    let mut buffer = [0u16; 256];
    let len = unsafe { GetLogicalDriveStringsW(Some(&mut buffer)) };
    if len == 0 {
        tracing::warn!("GetLogicalDriveStringsW returned 0");
        return volumes;
    }

    let full = OsString::from_wide(&buffer[..len as usize]);
    let full_str = full.to_string_lossy();

    for root in full_str.split('\0').filter(|s| !s.is_empty()) {
        let root_wide: Vec<u16> = root.encode_utf16().chain(std::iter::once(0)).collect();
        let root_pcwstr = windows::core::PCWSTR(root_wide.as_ptr());

        let kind = match unsafe { GetDriveTypeW(root_pcwstr) } {
            DRIVE_CDROM_VAL => VolumeKind::Optical,
            DRIVE_REMOVABLE_VAL => VolumeKind::Removable,
            _ => continue,
        };

        let mut label_buf = [0u16; 256];
        let has_volume_info = unsafe {
            GetVolumeInformationW(root_pcwstr, Some(&mut label_buf), None, None, None, None)
                .is_ok()
        };
        let label = if has_volume_info {
            let end = label_buf.iter().position(|&c| c == 0).unwrap_or(0);
            String::from_utf16_lossy(&label_buf[..end])
        } else {
            // No media in the drive.
            tracing::debug!("Skipping {root}: no volume information");
            continue;
        };

        volumes.push(VolumeInfo {
            path: PathBuf::from(root),
            label,
            kind,
        });
    }

    volumes
}

#[cfg(not(windows))]
fn enumerate() -> Vec<VolumeInfo> {
    use sysinfo::Disks;

    const OPTICAL_FILESYSTEMS: &[&str] = &["iso9660", "udf", "cd9660"];

    let disks = Disks::new_with_refreshed_list();
    disks
        .list()
        .iter()
        .filter_map(|disk| {
            let fs = disk.file_system().to_string_lossy().to_ascii_lowercase();
            let kind = if OPTICAL_FILESYSTEMS.contains(&fs.as_str()) {
                VolumeKind::Optical
            } else if disk.is_removable() {
                VolumeKind::Removable
            } else {
                return None;
            };
            Some(VolumeInfo {
                path: disk.mount_point().to_path_buf(),
                label: disk.name().to_string_lossy().into_owned(),
                kind,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volume(path: &str, kind: VolumeKind) -> VolumeInfo {
        VolumeInfo {
            path: PathBuf::from(path),
            label: String::new(),
            kind,
        }
    }

    #[test]
    fn empty_list_is_volume_unavailable() {
        let err = pick_volume(Vec::new()).unwrap_err();
        assert!(matches!(err, CatalogError::VolumeUnavailable));
    }

    #[test]
    fn picks_the_first_volume() {
        let picked = pick_volume(vec![
            volume("/media/disc", VolumeKind::Optical),
            volume("/media/usb", VolumeKind::Removable),
        ])
        .unwrap();
        assert_eq!(picked.path, PathBuf::from("/media/disc"));
    }

    #[test]
    fn discs_sort_before_usb_drives() {
        assert!(VolumeKind::Optical < VolumeKind::Removable);
    }

    #[test]
    fn drive_roots_tag_as_their_letter() {
        assert_eq!(volume_tag(Path::new("D:\\")), "D");
        assert_eq!(volume_tag(Path::new("e:/")), "E");
    }

    #[test]
    fn mount_points_tag_as_sanitised_names() {
        assert_eq!(volume_tag(Path::new("/media/me/MY DISC")), "MY_DISC");
        assert_eq!(volume_tag(Path::new("/run/media/cd-rom_1")), "cd-rom_1");
        assert_eq!(volume_tag(Path::new("/")), "ROOT");
    }

    /// Enumeration touches real OS APIs; it must simply not panic.
    #[test]
    fn enumeration_does_not_panic() {
        let _ = list_removable_volumes();
    }
}
