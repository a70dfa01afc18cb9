//! On-disk naming convention shared by the writer, reader and remover.
//!
//! - Shadow name: `<name>.1`
//! - Temporary name: `<name>.<YYYY-MM-DD>T<HH-MM-SS>.<micros>` (local time)
//!
//! Suffixes are appended to the raw `OsStr` of the public name rather than joined
//! as path components, so `dir/state` becomes `dir/state.1`.

use chrono::{DateTime, Local};
use std::ffi::OsString;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use crate::errors::{Result, SafeFileError};

/// Suffix of the second hard link kept in lock-step with the public name.
pub const SHADOW_SUFFIX: &str = ".1";

/// chrono format of the temporary-file suffix, e.g. `.2006-01-02T15-04-05.000000`.
pub const TIMESTAMP_FORMAT: &str = ".%Y-%m-%dT%H-%M-%S%.6f";

fn with_suffix(name: &Path, suffix: &str) -> PathBuf {
    let mut s: OsString = name.as_os_str().to_os_string();
    s.push(suffix);
    PathBuf::from(s)
}

/// Path of the shadow link for `name`.
pub fn shadow_path(name: impl AsRef<Path>) -> PathBuf {
    with_suffix(name.as_ref(), SHADOW_SUFFIX)
}

/// Timestamp suffix (including the leading dot) for `at`.
pub(crate) fn timestamp_suffix(at: &DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Temporary sibling of `name` stamped with `at`.
pub(crate) fn temp_path_at(name: &Path, at: &DateTime<Local>) -> PathBuf {
    with_suffix(name, &timestamp_suffix(at))
}

/// Temporary sibling of `name` stamped with the current time.
pub(crate) fn temp_path(name: &Path) -> PathBuf {
    temp_path_at(name, &Local::now())
}

/// Reject names that cannot carry a suffix as a sibling file.
pub(crate) fn validate_name(name: &Path) -> Result<()> {
    let raw = name.as_os_str();
    let trailing_sep = raw
        .to_string_lossy()
        .ends_with(|c: char| c == MAIN_SEPARATOR || c == '/');
    if raw.is_empty() || trailing_sep || name.file_name().is_none() {
        return Err(SafeFileError::InvalidName(name.to_path_buf()));
    }
    Ok(())
}
