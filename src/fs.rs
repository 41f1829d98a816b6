//! Filesystem access used when materializing artifacts
//!
//! Every failure is reported as [`SvnError::Filesystem`] with the path involved.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use crate::svn::SvnError;

/// Filesystem operations needed by the resolver
pub trait FileSystem {
    /// Create `path` and its parents; succeeds if it already exists
    fn ensure_dir(&self, path: &Path) -> Result<(), SvnError>;

    /// Copy `src` to `dst`, replacing `dst`
    fn copy_file(&self, src: &Path, dst: &Path) -> Result<(), SvnError>;

    /// Write `contents` to `path`, replacing it
    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), SvnError>;

    /// Last modification time of `path`
    fn modified_time(&self, path: &Path) -> Result<SystemTime, SvnError>;
}

/// [`FileSystem`] over `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn ensure_dir(&self, path: &Path) -> Result<(), SvnError> {
        fs::create_dir_all(path).map_err(|e| SvnError::filesystem(path, e))
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> Result<(), SvnError> {
        // Source problems surface here; anything after is the destination's.
        fs::metadata(src).map_err(|e| SvnError::filesystem(src, e))?;
        fs::copy(src, dst)
            .map(|_| ())
            .map_err(|e| SvnError::filesystem(dst, e))
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), SvnError> {
        fs::write(path, contents).map_err(|e| SvnError::filesystem(path, e))
    }

    fn modified_time(&self, path: &Path) -> Result<SystemTime, SvnError> {
        fs::metadata(path)
            .and_then(|m| m.modified())
            .map_err(|e| SvnError::filesystem(path, e))
    }
}
