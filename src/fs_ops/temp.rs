//! Staged temporary file.
//! - Created next to the public name with a timestamp suffix and O_EXCL semantics.
//! - Holds the complete, fsynced new content before any link points at it.
//! - Removed when the guard is dropped, on success and on every error path.
//!   Hard links made from it under other names keep the content alive.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;
use tracing::{debug, trace};

use super::names::temp_path;
use crate::errors::{Result, SafeFileError};
use crate::platform::{create_exclusive, set_exact_mode};

/// Attempts at finding an unused temporary name before giving up.
const MAX_TRIES: u32 = 10;

/// RAII guard owning a staged temporary file.
#[derive(Debug)]
pub(crate) struct TempFile {
    path: PathBuf,
}

impl TempFile {
    /// Create a temporary sibling of `name` with `mode`, write `data` fully and
    /// sync it to disk.
    pub(crate) fn stage(name: &Path, mode: u32, data: &[u8]) -> Result<TempFile> {
        Self::stage_with(name, mode, data, |f| set_exact_mode(f, mode))
    }

    /// `set_mode` runs on the open descriptor after the guard owns the path.
    fn stage_with<F>(name: &Path, mode: u32, data: &[u8], set_mode: F) -> Result<TempFile>
    where
        F: FnOnce(&fs::File) -> io::Result<()>,
    {
        let (tmp, mut file) = create_unique(name, mode)?;
        // From here on the guard owns the path; early returns remove it.
        let guard = TempFile { path: tmp };

        set_mode(&file).map_err(|e| SafeFileError::io("chmod temporary file", &guard.path, e))?;
        file.write_all(data)
            .map_err(|e| SafeFileError::io("write temporary file", &guard.path, e))?;
        file.sync_all()
            .map_err(|e| SafeFileError::io("sync temporary file", &guard.path, e))?;
        drop(file);

        trace!(path = %guard.path.display(), bytes = data.len(), "staged temporary file");
        Ok(guard)
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => trace!(path = %self.path.display(), "removed temporary file"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "failed to remove temporary file")
            }
        }
    }
}

/// Create the temporary file, regenerating the timestamp if another writer in
/// this process grabbed the same microsecond.
fn create_unique(name: &Path, mode: u32) -> Result<(PathBuf, fs::File)> {
    for attempt in 0..MAX_TRIES {
        let tmp = temp_path(name);
        match create_exclusive(&tmp, mode) {
            Ok(f) => return Ok((tmp, f)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                trace!(path = %tmp.display(), attempt, "temporary name taken; retrying");
                thread::sleep(Duration::from_micros(1));
            }
            Err(e) => return Err(SafeFileError::io("create temporary file", tmp, e)),
        }
    }
    Err(SafeFileError::TempCollision(name.to_path_buf()))
}
