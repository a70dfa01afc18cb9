//! Durable reader.
//! Reads the public name, falls back to the shadow name, and retries a bounded
//! number of rounds while both are missing (a concurrent writer may be between
//! unlinking and relinking them). Only "does not exist" is retried.

use std::fs;
use std::io;
use std::path::Path;
use std::thread;
use tracing::{debug, warn};

use super::names::{shadow_path, validate_name};
use crate::config::Options;
use crate::errors::{Result, SafeFileError};

/// Read `name` (or its shadow) with the default retry policy.
pub fn read_file(name: impl AsRef<Path>) -> Result<Vec<u8>> {
    read_file_with(name, &Options::default())
}

/// Read `name` (or its shadow) using `options.read_attempts` rounds spaced by
/// `options.retry_delay`.
///
/// # Errors
/// Any error other than not-found is returned immediately. When every round
/// finds both names missing, the last not-found error is returned.
pub fn read_file_with(name: impl AsRef<Path>, options: &Options) -> Result<Vec<u8>> {
    let name = name.as_ref();
    validate_name(name)?;
    let shadow = shadow_path(name);
    let rounds = options.read_attempts.max(1);
    let mut last_missing: Option<SafeFileError> = None;

    for round in 1..=rounds {
        for candidate in [name, shadow.as_path()] {
            match fs::read(candidate) {
                Ok(data) => {
                    if round > 1 || candidate != name {
                        debug!(path = %candidate.display(), round, "read after fallback");
                    }
                    return Ok(data);
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    last_missing = Some(SafeFileError::io("read", candidate, e));
                }
                Err(e) => return Err(SafeFileError::io("read", candidate, e)),
            }
        }
        if round < rounds && !options.retry_delay.is_zero() {
            thread::sleep(options.retry_delay);
        }
    }

    warn!(path = %name.display(), rounds, "neither name nor shadow exists");
    Err(last_missing.unwrap_or_else(|| {
        SafeFileError::io("read", shadow, io::Error::from(io::ErrorKind::NotFound))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};
    use tempfile::tempdir;

    #[test]
    fn prefers_public_name() {
        let dir = tempdir().unwrap();
        let name = dir.path().join("state");
        fs::write(&name, b"public").unwrap();
        fs::write(shadow_path(&name), b"shadow").unwrap();
        assert_eq!(read_file(&name).unwrap(), b"public");
    }

    #[test]
    fn falls_back_to_shadow() {
        let dir = tempdir().unwrap();
        let name = dir.path().join("state");
        fs::write(shadow_path(&name), b"X").unwrap();
        assert_eq!(read_file(&name).unwrap(), b"X");
    }

    #[test]
    fn missing_everywhere_is_not_found_after_all_rounds() {
        let dir = tempdir().unwrap();
        let name = dir.path().join("state");
        let opts = Options {
            read_attempts: 3,
            retry_delay: Duration::from_millis(20),
            ..Options::default()
        };
        let start = Instant::now();
        let err = read_file_with(&name, &opts).unwrap_err();
        assert!(err.is_not_found(), "unexpected error: {err}");
        // Two pauses between three rounds.
        assert!(start.elapsed() >= Duration::from_millis(40));
        assert!(err.to_string().contains("state.1"), "last error names the shadow: {err}");
    }

    #[test]
    fn zero_attempts_still_reads_once() {
        let dir = tempdir().unwrap();
        let name = dir.path().join("state");
        fs::write(&name, b"once").unwrap();
        let opts = Options {
            read_attempts: 0,
            ..Options::default()
        };
        assert_eq!(read_file_with(&name, &opts).unwrap(), b"once");
    }

    #[test]
    fn non_missing_error_is_not_retried() {
        let dir = tempdir().unwrap();
        let name = dir.path().join("state");
        fs::create_dir(&name).unwrap();
        fs::write(shadow_path(&name), b"shadow").unwrap();
        let opts = Options {
            retry_delay: Duration::from_secs(5),
            ..Options::default()
        };
        let start = Instant::now();
        let err = read_file_with(&name, &opts).unwrap_err();
        assert!(!err.is_not_found(), "unexpected error: {err}");
        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
