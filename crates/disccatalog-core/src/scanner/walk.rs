/// Lazy directory walker built on `jwalk`.
///
/// `jwalk` runs in `Parallelism::Serial` mode: the pipeline is a one-shot
/// batch job and the walk order is irrelevant to the output, so there is
/// nothing to gain from a thread pool. Symlinks are not followed and only
/// regular files are considered.
///
/// A directory that cannot be listed, the root included, fails the scan
/// with that directory's path.
///
/// Path segments that are not valid UTF-8 are kept distinct by writing each
/// invalid byte, and any `%` in such a segment, as `%XX`. Valid names pass
/// through untouched.
use crate::error::{CatalogError, Result};
use crate::model::{MediaKind, RawEntry};
use crate::scanner::classify::classify_path;
use compact_str::CompactString;
use std::ffi::OsStr;
use std::io;
use std::path::{Component, Path, PathBuf};

type WalkItem = <jwalk::WalkDir as IntoIterator>::Item;

/// Iterator over the classified media files below a root directory.
///
/// Yields `Err(ScanFailure)` at most once; the iterator is exhausted after
/// the first error so callers cannot accidentally keep a partial listing.
pub struct TreeScanner {
    root: PathBuf,
    walker: Box<dyn Iterator<Item = WalkItem>>,
    failed: bool,
}

impl TreeScanner {
    /// Open `root` for scanning.
    ///
    /// Relative roots are resolved against the current directory. Fails with
    /// `ScanFailure` when the root cannot be read or is not a directory.
    pub fn new(root: &Path) -> Result<Self> {
        let root = std::path::absolute(root).map_err(|e| CatalogError::scan(root, e))?;
        let meta = std::fs::metadata(&root).map_err(|e| CatalogError::scan(&root, e))?;
        if !meta.is_dir() {
            return Err(CatalogError::scan(
                &root,
                io::Error::new(io::ErrorKind::InvalidInput, "scan root is not a directory"),
            ));
        }

        let walker = jwalk::WalkDir::new(&root)
            .skip_hidden(false)
            .follow_links(false)
            .parallelism(jwalk::Parallelism::Serial);

        Ok(Self {
            root,
            walker: Box::new(walker.into_iter()),
            failed: false,
        })
    }

    /// Absolute root being walked.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Build a raw entry for a file already known to be audio or image.
    fn raw_entry(&self, path: PathBuf, kind: MediaKind) -> Result<RawEntry> {
        let relative = path.strip_prefix(&self.root).map_err(|_| {
            CatalogError::scan(
                &path,
                io::Error::new(io::ErrorKind::InvalidData, "entry outside scan root"),
            )
        })?;
        let segments: Vec<CompactString> = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(segment_name(part)),
                _ => None,
            })
            .collect();

        let locator = file_locator(&path)?;

        // Audio sizes are never displayed or compared, so skip the stat.
        let size_bytes = match kind {
            MediaKind::Image => std::fs::metadata(&path)
                .map_err(|e| CatalogError::scan(&path, e))?
                .len(),
            MediaKind::Audio => 0,
        };

        Ok(RawEntry {
            kind,
            segments,
            path,
            locator,
            size_bytes,
            duration: None,
        })
    }
}

impl Iterator for TreeScanner {
    type Item = Result<RawEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let mut entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    self.failed = true;
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone());
                    return Some(Err(CatalogError::scan(path, io::Error::other(err))));
                }
            };

            if let Some(err) = entry.read_children_error.take() {
                self.failed = true;
                let path = err.path().map_or_else(|| entry.path(), Path::to_path_buf);
                return Some(Err(CatalogError::scan(path, io::Error::other(err))));
            }

            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let Some(kind) = classify_path(&path) else {
                continue;
            };

            return match self.raw_entry(path, kind) {
                Ok(raw) => Some(Ok(raw)),
                Err(err) => {
                    self.failed = true;
                    Some(Err(err))
                }
            };
        }
    }
}

/// Display name of one path segment.
fn segment_name(part: &OsStr) -> CompactString {
    if let Some(name) = part.to_str() {
        return CompactString::new(name);
    }
    let mut name = CompactString::default();
    for chunk in part.as_encoded_bytes().utf8_chunks() {
        for c in chunk.valid().chars() {
            if c == '%' {
                name.push_str("%25");
            } else {
                name.push(c);
            }
        }
        for byte in chunk.invalid() {
            name.push_str(&format!("%{byte:02X}"));
        }
    }
    name
}

/// Absolute `file://` URI for `path`, percent-encoded as browsers expect.
fn file_locator(path: &Path) -> Result<String> {
    url::Url::from_file_path(path)
        .map(String::from)
        .map_err(|()| {
            CatalogError::scan(
                path,
                io::Error::new(io::ErrorKind::InvalidInput, "path cannot be expressed as a URI"),
            )
        })
}
