//! Windows implementations of platform helpers (best-effort, minimal ACL awareness).
//!
//! Notes:
//! - Windows lacks POSIX mode semantics; permission bits are ignored. Marking the
//!   temporary file read-only would make its removal fail afterwards.
//! - Directory fsync is not supported via std; it is a no-op here.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

/// Create a new file at `path`, failing if it already exists.
pub(crate) fn create_exclusive(path: &Path, _mode: u32) -> io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}

pub(crate) fn set_exact_mode(_f: &File, _mode: u32) -> io::Result<()> {
    Ok(())
}

pub(crate) fn fsync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}
