//! Typed error definitions for safe_file.
//! Every variant that wraps an OS error keeps the original `io::Error` as its source,
//! so callers can classify failures by `io::ErrorKind`.

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

use crate::fs_ops::hint_suffix;

#[derive(Debug, Error)]
pub enum SafeFileError {
    #[error("{op} '{}': {source}{}", .path.display(), hint_suffix(.source))]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("hard link '{}' -> '{}': {source}{}", .from.display(), .to.display(), hint_suffix(.source))]
    Link {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid file name '{}': must be non-empty and must not end in a path separator", .0.display())]
    InvalidName(PathBuf),

    #[error("Could not allocate a unique temporary file next to '{}'", .0.display())]
    TempCollision(PathBuf),

    #[error("Contents of '{}' are not valid UTF-8", .path.display())]
    NotUtf8 {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
}

pub type Result<T> = std::result::Result<T, SafeFileError>;

impl SafeFileError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        SafeFileError::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// The `io::ErrorKind` this error maps to.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            SafeFileError::Io { source, .. } | SafeFileError::Link { source, .. } => source.kind(),
            SafeFileError::InvalidName(_) => io::ErrorKind::InvalidInput,
            SafeFileError::TempCollision(_) => io::ErrorKind::AlreadyExists,
            SafeFileError::NotUtf8 { .. } => io::ErrorKind::InvalidData,
        }
    }

    /// True for the "does not exist" class (missing file or missing directory).
    pub fn is_not_found(&self) -> bool {
        self.kind() == io::ErrorKind::NotFound
    }

    /// The underlying OS error, if this error came from a filesystem call.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            SafeFileError::Io { source, .. } | SafeFileError::Link { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<SafeFileError> for io::Error {
    fn from(e: SafeFileError) -> Self {
        io::Error::new(e.kind(), e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_variant_reports_kind_and_path() {
        let e = SafeFileError::io(
            "read",
            "/nonexistent/state.json",
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(e.is_not_found());
        let msg = e.to_string();
        assert!(msg.starts_with("read '/nonexistent/state.json'"), "msg was: {msg}");
        assert!(msg.contains("path not found"), "msg was: {msg}");
    }

    #[test]
    fn conversion_to_io_error_preserves_kind() {
        let e = SafeFileError::InvalidName(PathBuf::new());
        let io_err: io::Error = e.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }

    #[cfg(unix)]
    #[test]
    fn link_variant_mentions_both_paths() {
        let e = SafeFileError::Link {
            from: PathBuf::from("a.1"),
            to: PathBuf::from("a"),
            source: io::Error::from_raw_os_error(libc::EXDEV),
        };
        let msg = e.to_string();
        assert!(msg.contains("'a.1' -> 'a'"), "msg was: {msg}");
        assert!(msg.contains("cross-filesystem"), "msg was: {msg}");
        assert!(!e.is_not_found());
        assert!(e.io_error().is_some());
    }
}
