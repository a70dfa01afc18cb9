//! Durable writer.
//! Stages new content in a fsynced temporary file, then publishes it under the
//! shadow name and the public name with three ordered link calls. At every point
//! at least one of the two names holds a complete version.

use std::path::Path;
use tracing::debug;

use super::link::link;
use super::names::{shadow_path, validate_name};
use super::temp::TempFile;
use crate::errors::Result;
use crate::platform::fsync_dir;

/// Owner read/write only.
pub const DEFAULT_MODE: u32 = 0o600;

/// Write `data` to `name` with mode 0o600.
///
/// Also maintains `<name>.1` and briefly a `<name>.<timestamp>` temporary file.
pub fn write_file(name: impl AsRef<Path>, data: impl AsRef<[u8]>) -> Result<()> {
    write_file_with_mode(name, DEFAULT_MODE, data)
}

/// Write `data` to `name` with the given permission bits.
///
/// # Errors
/// Returns the first fatal I/O error. A missing parent directory surfaces as a
/// not-found error from creating the temporary file; no link is touched then.
pub fn write_file_with_mode(
    name: impl AsRef<Path>,
    mode: u32,
    data: impl AsRef<[u8]>,
) -> Result<()> {
    let name = name.as_ref();
    let data = data.as_ref();
    validate_name(name)?;

    let tmp = TempFile::stage(name, mode, data)?;
    let shadow = shadow_path(name);
    publish(tmp.path(), &shadow, name)?;
    drop(tmp);

    sync_parent(name);
    debug!(path = %name.display(), bytes = data.len(), mode = %format!("{mode:o}"), "published");
    Ok(())
}

/// Persist the new directory entries of `name`. Best-effort: the content is
/// already synced, so a failure is only logged.
fn sync_parent(name: &Path) {
    let parent = match name.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if let Err(e) = fsync_dir(parent) {
        debug!(dir = %parent.display(), error = %e, "failed to sync parent directory");
    }
}

/// Link `tmp` into place under `shadow` and then `name`.
///
/// The first call finishes a previous writer that stopped after updating the
/// shadow name but before updating the public name.
pub(crate) fn publish(tmp: &Path, shadow: &Path, name: &Path) -> Result<()> {
    link(shadow, name)?;
    link(tmp, shadow)?;
    link(shadow, name)
}
