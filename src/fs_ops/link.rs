//! Replace-by-hard-link primitive.
//!
//! `link(old, new)` makes `new` another name for the file behind `old`:
//!   1. unlink `new` (absent is fine: nothing to replace)
//!   2. hard-link `old` -> `new`
//!
//! Both steps may race an identical sequence in another process. A missing `old`
//! (someone already moved past this state) or an existing `new` (someone already
//! created the link) means the end state was reached elsewhere and counts as success.

use std::fs;
use std::io;
use std::path::Path;
use tracing::trace;

use crate::errors::{Result, SafeFileError};

/// Remove `path`, treating "does not exist" as success.
pub(crate) fn unlink_if_present(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            trace!(path = %path.display(), "unlink: already absent");
            Ok(())
        }
        Err(e) => Err(SafeFileError::io("unlink", path, e)),
    }
}

/// Hard-link `old` -> `new`, treating a vanished `old` or an existing `new` as success.
pub(crate) fn hard_link_tolerant(old: &Path, new: &Path) -> Result<()> {
    match fs::hard_link(old, new) {
        Ok(()) => Ok(()),
        Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::AlreadyExists) => {
            trace!(
                from = %old.display(),
                to = %new.display(),
                kind = ?e.kind(),
                "link raced with a concurrent writer; treating as done"
            );
            Ok(())
        }
        Err(e) => Err(SafeFileError::Link {
            from: old.to_path_buf(),
            to: new.to_path_buf(),
            source: e,
        }),
    }
}

/// Make `new` a hard link to `old`, replacing any existing `new`.
pub(crate) fn link(old: &Path, new: &Path) -> Result<()> {
    unlink_if_present(new)?;
    hard_link_tolerant(old, new)?;
    trace!(from = %old.display(), to = %new.display(), "linked");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn replaces_existing_target() {
        let dir = tempdir().unwrap();
        let old = dir.path().join("new_content");
        let new = dir.path().join("state");
        fs::write(&old, b"new").unwrap();
        fs::write(&new, b"old").unwrap();
        link(&old, &new).unwrap();
        assert_eq!(fs::read(&new).unwrap(), b"new");
        assert_eq!(fs::read(&old).unwrap(), b"new");
    }

    #[test]
    fn creates_missing_target() {
        let dir = tempdir().unwrap();
        let old = dir.path().join("src");
        let new = dir.path().join("dst");
        fs::write(&old, b"x").unwrap();
        link(&old, &new).unwrap();
        assert_eq!(fs::read(&new).unwrap(), b"x");
    }

    #[test]
    fn missing_source_is_tolerated() {
        let dir = tempdir().unwrap();
        let old = dir.path().join("gone");
        let new = dir.path().join("state");
        fs::write(&new, b"stale").unwrap();
        link(&old, &new).unwrap();
        // The target was unlinked and nothing replaced it.
        assert!(!new.exists());
    }

    #[test]
    fn existing_target_at_link_step_is_tolerated() {
        let dir = tempdir().unwrap();
        let old = dir.path().join("src");
        let new = dir.path().join("dst");
        fs::write(&old, b"mine").unwrap();
        fs::write(&new, b"theirs").unwrap();
        // Simulate losing the race between unlink and link.
        hard_link_tolerant(&old, &new).unwrap();
        assert_eq!(fs::read(&new).unwrap(), b"theirs");
    }

    #[test]
    fn unlink_absent_is_ok() {
        let dir = tempdir().unwrap();
        unlink_if_present(&dir.path().join("nothing")).unwrap();
    }

    #[test]
    fn unlink_directory_is_fatal() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("inner"), b"").unwrap();
        let err = link(&dir.path().join("src"), &sub).unwrap_err();
        assert!(!err.is_not_found(), "unexpected error: {err}");
        assert!(sub.is_dir());
    }
}
