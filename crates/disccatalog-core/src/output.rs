/// Writing the finished document.
use crate::error::{CatalogError, Result};
use std::path::Path;

/// Write `bytes` to `path` in a single call, replacing any existing file.
///
/// The parent directory must already exist; it is not created.
pub fn write_document(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).map_err(|source| CatalogError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_and_overwrites() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("index.html");
        write_document(&path, b"first").unwrap();
        write_document(&path, b"second").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn missing_parent_is_a_write_failure() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("no-such-dir").join("index.html");
        let err = write_document(&path, b"x").unwrap_err();
        assert!(matches!(err, CatalogError::WriteFailure { .. }));
        assert!(err.to_string().contains("index.html"));
    }
}
