//! `SafeFile`: a public name bundled with its Options.

use std::path::{Path, PathBuf};

use crate::config::Options;
use crate::errors::{Result, SafeFileError};
use crate::fs_ops::{read_file_with, remove_file, shadow_path, write_file_with_mode};

/// Handle to a file managed with the shadow-link protocol.
///
/// Holds no open descriptors; every call is an independent blocking operation.
#[derive(Debug, Clone)]
pub struct SafeFile {
    path: PathBuf,
    shadow: PathBuf,
    options: Options,
}

impl SafeFile {
    /// Handle for `path` with default Options.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_options(path, Options::default())
    }

    pub fn with_options(path: impl Into<PathBuf>, options: Options) -> Self {
        let path = path.into();
        let shadow = shadow_path(&path);
        Self {
            path,
            shadow,
            options,
        }
    }

    /// Public name.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Shadow name (`<path>.1`).
    pub fn shadow_path(&self) -> &Path {
        &self.shadow
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the content with `data` using `options.mode`.
    pub fn write(&self, data: impl AsRef<[u8]>) -> Result<()> {
        write_file_with_mode(&self.path, self.options.mode, data)
    }

    pub fn read(&self) -> Result<Vec<u8>> {
        read_file_with(&self.path, &self.options)
    }

    /// Read the content as UTF-8 text.
    pub fn read_to_string(&self) -> Result<String> {
        let bytes = self.read()?;
        String::from_utf8(bytes).map_err(|source| SafeFileError::NotUtf8 {
            path: self.path.clone(),
            source,
        })
    }

    /// Remove both names.
    pub fn remove(&self) -> Result<()> {
        remove_file(&self.path)
    }
}
