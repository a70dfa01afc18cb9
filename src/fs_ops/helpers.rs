//! I/O error hints.
//!
//! Turns a raw `io::Error` into a short, actionable suffix appended to error
//! messages (see `SafeFileError`'s Display). Hints are chosen by raw OS code where
//! available and fall back to `io::ErrorKind`.

use std::io;

/// Platform-aware hint for an OS error code, if one is known.
fn hint_for_code(code: i32) -> Option<&'static str> {
    #[cfg(unix)]
    {
        match code {
            libc::EACCES | libc::EPERM => {
                Some(" — permission denied; check ownership and directory write permissions.")
            }
            libc::ENOENT => Some(" — path not found; verify the directory exists."),
            libc::EEXIST => Some(" — already exists."),
            libc::EXDEV => Some(" — cross-filesystem; hard links need both names on one filesystem."),
            libc::EMLINK => Some(" — too many hard links to this file."),
            libc::EISDIR => Some(" — is a directory; expected a regular file."),
            libc::ENOTDIR => Some(" — a path component is not a directory."),
            libc::ENOSPC => Some(" — insufficient space on device."),
            libc::EROFS => Some(" — read-only filesystem; cannot write here."),
            libc::ENAMETOOLONG => Some(" — filename or path too long; shorten path segments."),
            libc::ELOOP => Some(" — too many symbolic link levels (ELOOP); possible symlink cycle."),
            libc::EMFILE => Some(" — process file descriptor limit reached; close files or raise limits."),
            libc::ENFILE => Some(" — system-wide file table overflow; reduce open files."),
            libc::EIO => Some(" — low-level I/O error; check the device."),
            _ => None,
        }
    }
    #[cfg(windows)]
    {
        match code {
            5 => Some(" — access denied; check permissions."),                  // ERROR_ACCESS_DENIED
            2 | 3 => Some(" — path not found; verify the directory exists."),   // FILE/PATH NOT FOUND
            17 => Some(" — not same device; hard links need one volume."),      // ERROR_NOT_SAME_DEVICE
            32 => Some(" — sharing violation; file is in use."),                // ERROR_SHARING_VIOLATION
            80 | 183 => Some(" — already exists."),                             // FILE_EXISTS / ALREADY_EXISTS
            112 => Some(" — insufficient disk space."),                         // ERROR_DISK_FULL
            1 => Some(" — hard links are not supported on this volume."),       // ERROR_INVALID_FUNCTION
            _ => None,
        }
    }
    #[cfg(not(any(unix, windows)))]
    {
        let _ = code;
        None
    }
}

fn hint_for_kind(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => {
            Some(" — permission denied; check ownership and directory write permissions.")
        }
        io::ErrorKind::NotFound => Some(" — path not found; verify the directory exists."),
        io::ErrorKind::AlreadyExists => Some(" — already exists."),
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => {
            Some(" — busy/timed out; retry after the current write finishes.")
        }
        _ => None,
    }
}

/// Suffix appended after the OS error text: a hint plus the raw OS code when present.
pub(crate) fn hint_suffix(e: &io::Error) -> String {
    match e.raw_os_error() {
        Some(code) => {
            let hint = hint_for_code(code).unwrap_or("");
            format!("{hint} [os code: {code}]")
        }
        None => hint_for_kind(e.kind()).unwrap_or("").to_string(),
    }
}
