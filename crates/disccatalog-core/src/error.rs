/// Error taxonomy for a catalog run.
///
/// Every variant is fatal to the run. Per-file duration probe failures are
/// not represented here: they are absorbed by [`crate::probe`] and only
/// counted in the run report.
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the core crate.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// No optical or removable volume is mounted.
    #[error("no removable volume (CD/DVD or USB) is available")]
    VolumeUnavailable,

    /// The walk could not complete. No document is produced.
    #[error("scan failed at {}: {source}", path.display())]
    ScanFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The destination document could not be written.
    #[error("cannot write catalog to {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog identifier must not be empty")]
    EmptyCatalogId,

    #[error("invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("failed to encode {format} output: {message}")]
    Render {
        format: &'static str,
        message: String,
    },
}

impl CatalogError {
    /// Build a `ScanFailure` for `path` from any I/O error.
    pub fn scan(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ScanFailure {
            path: path.into(),
            source,
        }
    }

    /// `true` for failures raised while walking the volume.
    pub fn is_scan_failure(&self) -> bool {
        matches!(self, Self::ScanFailure { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_failure_message_names_the_path() {
        let err = CatalogError::scan(
            "/media/cdrom/Rock",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/media/cdrom/Rock"), "got: {msg}");
        assert!(msg.contains("denied"), "got: {msg}");
        assert!(err.is_scan_failure());
    }

    #[test]
    fn write_failure_is_not_a_scan_failure() {
        let err = CatalogError::WriteFailure {
            path: PathBuf::from("out.html"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        assert!(!err.is_scan_failure());
        assert!(err.to_string().contains("out.html"));
    }
}
