//! Platform-specific helpers.
//! This module hides OS differences (Unix/Windows) behind a uniform API so
//! the rest of the codebase can remain platform-agnostic.

#[cfg(unix)]
mod unix;
#[cfg(not(unix))]
mod windows;

#[cfg(unix)]
pub(crate) use unix::{create_exclusive, fsync_dir, set_exact_mode};

#[cfg(not(unix))]
pub(crate) use windows::{create_exclusive, fsync_dir, set_exact_mode};
